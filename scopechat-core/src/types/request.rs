//! Chat request type and builder.

use std::collections::HashMap;

use super::{ChatMessage, CommonParams, ResponseFormat, Tool, ToolChoice};
use crate::utils::cancel::CancelHandle;

/// A single chat call.
///
/// `provider_options` is keyed by provider id (e.g. `"agentscope"`); each
/// provider parses only its own entry. `headers` are call-level HTTP headers
/// and win over any provider or configured default header of the same name.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub common_params: CommonParams,
    pub tools: Option<Vec<Tool>>,
    pub tool_choice: Option<ToolChoice>,
    pub response_format: Option<ResponseFormat>,
    pub provider_options: HashMap<String, serde_json::Value>,
    pub headers: HashMap<String, String>,
    pub stream: bool,
    /// Aborts the HTTP request (and the stream) when cancelled.
    pub cancel: Option<CancelHandle>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }

    pub fn with_streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelHandle) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Options addressed to one provider, if present.
    pub fn provider_option(&self, provider_id: &str) -> Option<&serde_json::Value> {
        self.provider_options.get(provider_id)
    }
}

/// Builder for `ChatRequest`
#[derive(Debug, Clone, Default)]
pub struct ChatRequestBuilder {
    request: ChatRequest,
}

impl ChatRequestBuilder {
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.request.messages.push(message);
        self
    }

    pub fn messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.request.messages = messages;
        self
    }

    pub fn common_params(mut self, params: CommonParams) -> Self {
        self.request.common_params = params;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.request.common_params.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.request.common_params.max_tokens = Some(max_tokens);
        self
    }

    pub fn tools(mut self, tools: Vec<Tool>) -> Self {
        self.request.tools = Some(tools);
        self
    }

    pub fn tool_choice(mut self, choice: ToolChoice) -> Self {
        self.request.tool_choice = Some(choice);
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.request.response_format = Some(format);
        self
    }

    pub fn provider_option(mut self, provider_id: impl Into<String>, value: serde_json::Value) -> Self {
        self.request.provider_options.insert(provider_id.into(), value);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.request.stream = stream;
        self
    }

    pub fn cancel(mut self, cancel: CancelHandle) -> Self {
        self.request.cancel = Some(cancel);
        self
    }

    pub fn build(self) -> ChatRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_messages_and_options() {
        let req = ChatRequest::builder()
            .message(ChatMessage::system("be brief").build())
            .message(ChatMessage::user("hi").build())
            .temperature(0.2)
            .provider_option("agentscope", serde_json::json!({"userId": "u1"}))
            .header("x-call", "1")
            .build();

        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.common_params.temperature, Some(0.2));
        assert_eq!(req.provider_option("agentscope").unwrap()["userId"], "u1");
        assert!(req.provider_option("openai").is_none());
        assert!(!req.stream);
    }
}
