//! Facade tests: prelude, macros and the env-configured default client.

use futures_util::StreamExt;
use scopechat::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SSE: &str = "event: response\n\
data: {\"id\":\"r1\",\"object\":\"response\",\"status\":\"in_progress\"}\n\n\
event: reasoning\n\
data: {\"object\":\"content\",\"type\":\"reasoning\",\"text\":\"thinking\",\"msg_id\":\"rs\"}\n\n\
event: text\n\
data: {\"object\":\"content\",\"type\":\"text\",\"text\":\"Hi there\",\"msg_id\":\"m\"}\n\n\
event: response\n\
data: {\"id\":\"r1\",\"object\":\"response\",\"status\":\"completed\"}\n\n";

fn client(server: &MockServer) -> AgentScopeClient {
    AgentScopeClient::builder()
        .base_url(server.uri())
        .user_id("facade-user")
        .build()
        .unwrap()
}

#[test]
fn default_client_reads_environment_with_fallbacks() {
    let client = scopechat::agentscope().unwrap();
    assert!(client.config().user_id.is_some());
    assert_eq!(client.default_model(), scopechat::provider_ext::agentscope::DEFAULT_MODEL_ID);
}

#[tokio::test]
async fn chat_with_macro_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_partial_json(json!({
            "user_id": "facade-user",
            "input": [
                {"role": "system", "content": [{"type": "text", "text": "be brief"}]},
                {"role": "user", "content": [{"type": "text", "text": "hello"}]}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "completed",
            "output": [{"role": "assistant", "content": [{"type": "text", "text": "hi"}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .chat(vec![system!("be brief"), user!("hello")])
        .await
        .unwrap();
    assert_eq!(response.text(), "hi");
    assert_eq!(response.finish_reason, FinishReason::Stop);
}

#[tokio::test]
async fn chat_stream_yields_reasoning_then_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SSE, "text/event-stream"))
        .mount(&server)
        .await;

    let model = client(&server).language_model(Some("custom-model"));
    assert_eq!(model.model_id(), "custom-model");

    let parts: Vec<ChatStreamPart> = model
        .chat_stream(vec![user!("hello")])
        .await
        .unwrap()
        .map(|p| p.unwrap())
        .collect()
        .await;

    let reasoning: String = parts
        .iter()
        .filter_map(|p| match p {
            ChatStreamPart::ReasoningDelta { delta, .. } => Some(delta.as_str()),
            _ => None,
        })
        .collect();
    let text: String = parts
        .iter()
        .filter_map(|p| match p {
            ChatStreamPart::TextDelta { delta, .. } => Some(delta.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(reasoning, "thinking");
    assert_eq!(text, "Hi there");
    assert!(matches!(
        parts.get(1),
        Some(ChatStreamPart::ResponseMetadata { model_id: Some(m), .. }) if m == "custom-model"
    ));
    assert!(matches!(
        parts.last(),
        Some(ChatStreamPart::Finish { finish_reason: FinishReason::Stop, .. })
    ));
}

#[tokio::test]
async fn errors_expose_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client(&server).chat(vec![user!("hello")]).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
    assert!(err.is_retryable());
}
