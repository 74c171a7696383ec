//! AgentScope chat model
//!
//! Single-shot calls go to `{base_url}{process_path}` and are parsed as one
//! JSON body; streaming calls go to `{base_url}{stream_path}` and the body is
//! decoded incrementally by `AgentScopeEventConverter`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use super::config::AgentScopeConfig;
use crate::error::LlmError;
use crate::provider_options::AgentScopeOptions;
use crate::standards::agentscope::events::{is_truthy, message_text};
use crate::standards::agentscope::{
    AgentScopeEventConverter, AgentScopeRequest, PROVIDER_ID, assert_object, build_api_call_error,
    collect_warnings, convert_messages, map_finish_reason, normalize_usage,
};
use crate::streaming::StreamFactory;
use crate::traits::ChatCapability;
use crate::types::{
    ChatRequest, ChatResponse, ChatStreamResponse, ContentPart, HttpRequestInfo, HttpResponseInfo,
    Warning,
};
use crate::utils::cancel::{CancelHandle, with_cancel};
use crate::utils::headers::merge_headers;

/// Everything needed to issue one call, built before any network I/O.
struct PreparedCall {
    body: Value,
    headers: HeaderMap,
    warnings: Vec<Warning>,
}

/// Chat model bound to one AgentScope server and model id.
#[derive(Debug, Clone)]
pub struct AgentScopeChatModel {
    model_id: String,
    config: Arc<AgentScopeConfig>,
    http_client: reqwest::Client,
}

impl AgentScopeChatModel {
    pub fn new(
        model_id: impl Into<String>,
        config: Arc<AgentScopeConfig>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            config,
            http_client,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn provider(&self) -> &'static str {
        PROVIDER_ID
    }

    /// Single-shot call.
    pub async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let prepared = self.prepare(&request, false)?;
        let url = self.config.process_url();
        let response = self
            .send(&url, &prepared, request.cancel.as_ref())
            .await?;

        let response_info =
            HttpResponseInfo::from_headers(response.headers(), Some(self.model_id.clone()));
        let read = async { response.text().await.map_err(LlmError::from) };
        let text = match &request.cancel {
            Some(cancel) => cancel.run(read).await?,
            None => read.await?,
        };

        let parsed: Value = serde_json::from_str(&text).map_err(|e| {
            LlmError::invalid_response(
                format!("AgentScope response is not valid JSON: {e}"),
                Some(Value::String(text.clone())),
            )
        })?;
        let body = assert_object(&parsed, "AgentScope response")?;

        if let Some(error) = body.get("error").filter(|e| is_truthy(e)) {
            return Err(vendor_error(error));
        }

        let output: &[Value] = body
            .get("output")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        // Falls back to the last message when none is tagged as assistant.
        let message = output
            .iter()
            .rev()
            .find(|m| m.get("role").and_then(Value::as_str) == Some("assistant"))
            .or_else(|| output.last());

        let text = message
            .and_then(Value::as_object)
            .and_then(message_text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                LlmError::NoContentGenerated("AgentScope returned no text content".to_string())
            })?;

        let status = body
            .get("status")
            .and_then(Value::as_str)
            .or_else(|| message.and_then(|m| m.get("status")).and_then(Value::as_str));
        let finish_reason = map_finish_reason(status);
        let usage = normalize_usage(body.get("usage")).unwrap_or_default();

        debug!(model = %self.model_id, %finish_reason, "AgentScope response parsed");

        Ok(ChatResponse {
            content: vec![ContentPart::text(text)],
            finish_reason,
            usage,
            warnings: prepared.warnings,
            request: HttpRequestInfo {
                body: prepared.body,
            },
            response: response_info.with_body(parsed),
        })
    }

    /// Streaming call. Returns once response headers arrive; parts are decoded
    /// as the caller polls the stream.
    pub async fn stream(&self, request: ChatRequest) -> Result<ChatStreamResponse, LlmError> {
        let prepared = self.prepare(&request, true)?;
        let url = self.config.stream_url();
        let response = self
            .send(&url, &prepared, request.cancel.as_ref())
            .await?;

        if response.content_length() == Some(0) {
            return Err(LlmError::invalid_response(
                "AgentScope stream response body is empty",
                None,
            ));
        }

        let response_info =
            HttpResponseInfo::from_headers(response.headers(), Some(self.model_id.clone()));
        let converter = AgentScopeEventConverter::new(self.model_id.clone())
            .with_warnings(prepared.warnings)
            .with_warn_unknown_events(self.config.warn_unknown_events);

        let mut stream = StreamFactory::from_response(response, converter);
        if let Some(cancel) = &request.cancel {
            stream = with_cancel(stream, cancel);
        }

        Ok(ChatStreamResponse {
            stream,
            request: HttpRequestInfo {
                body: prepared.body,
            },
            response: response_info,
        })
    }

    /// Validate input and build body and headers. Fails before any I/O.
    fn prepare(&self, request: &ChatRequest, stream: bool) -> Result<PreparedCall, LlmError> {
        let options = AgentScopeOptions::from_request(request)?;
        let warnings = collect_warnings(request);

        let user_id = options
            .user_id
            .as_ref()
            .or(self.config.user_id.as_ref())
            .filter(|id| !id.trim().is_empty())
            .cloned()
            .ok_or_else(|| LlmError::invalid_argument("userId", "user id must not be empty"))?;
        let session_id = options.session_id.clone().or_else(|| self.config.session_id.clone());

        let params = &request.common_params;
        let payload = AgentScopeRequest {
            user_id,
            session_id,
            input: convert_messages(&request.messages)?,
            stream,
            temperature: params.temperature,
            top_p: params.top_p,
            presence_penalty: params.presence_penalty,
            frequency_penalty: params.frequency_penalty,
            max_tokens: params.max_tokens,
            stop: params.stop_sequences.clone(),
            seed: params.seed,
            model: self.model_id.clone(),
        };

        let headers = merge_headers(&[
            &self.config.http_config.headers,
            &self.config.headers,
            &options.headers,
            &request.headers,
        ])?;

        Ok(PreparedCall {
            body: serde_json::to_value(&payload)?,
            headers,
            warnings,
        })
    }

    async fn send(
        &self,
        url: &str,
        prepared: &PreparedCall,
        cancel: Option<&CancelHandle>,
    ) -> Result<reqwest::Response, LlmError> {
        debug!(url, model = %self.model_id, stream = prepared.body["stream"].as_bool(), "sending AgentScope request");

        let send = async {
            self.http_client
                .post(url)
                .headers(prepared.headers.clone())
                .json(&prepared.body)
                .send()
                .await
                .map_err(LlmError::from)
        };
        let response = match cancel {
            Some(cancel) => cancel.run(send).await?,
            None => send.await?,
        };

        if !response.status().is_success() {
            let error = build_api_call_error(response, url, &prepared.body).await;
            debug!(status = ?error.status_code(), retryable = error.is_retryable(), "AgentScope request failed");
            return Err(error);
        }
        Ok(response)
    }
}

fn vendor_error(error: &Value) -> LlmError {
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| error.as_str())
        .unwrap_or("AgentScope returned an error")
        .to_string();
    LlmError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message,
        error_code: error.get("code").and_then(Value::as_str).map(str::to_string),
    }
}

#[async_trait]
impl ChatCapability for AgentScopeChatModel {
    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        self.generate(request).await
    }

    async fn chat_stream_request(
        &self,
        request: ChatRequest,
    ) -> Result<ChatStreamResponse, LlmError> {
        self.stream(request).await
    }
}
