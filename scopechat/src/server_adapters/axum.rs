//! Axum-specific server adapters
//!
//! Converts a `ChatStream` into an Axum `Sse` response whose `data:` frames
//! are the JSON-serialized stream parts, so a browser client can consume the
//! same part union the Rust caller sees.
//!
//! ```rust,ignore
//! use axum::{Json, Router, routing::post};
//! use scopechat::prelude::*;
//! use scopechat::server_adapters::axum::{SseOptions, to_sse_response};
//!
//! async fn chat(Json(messages): Json<Vec<ChatMessage>>) -> axum::response::Response {
//!     let Ok(client) = scopechat::agentscope() else {
//!         return StatusCode::INTERNAL_SERVER_ERROR.into_response();
//!     };
//!     match client.chat_stream(messages).await {
//!         Ok(stream) => to_sse_response(stream, SseOptions::production()).into_response(),
//!         Err(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
//!     }
//! }
//! ```

use std::convert::Infallible;
use std::pin::Pin;

use axum::response::sse::{Event, Sse};
use futures::{Stream, StreamExt};
use serde_json::json;

use crate::error::LlmError;
use crate::streaming::{ChatStream, ChatStreamPart};

const DEFAULT_MASKED_ERROR: &str = "internal error";

/// Options for SSE encoding.
#[derive(Debug, Clone)]
pub struct SseOptions {
    /// Forward `stream-start` (including call warnings).
    ///
    /// Default: `true`
    pub include_start: bool,

    /// Forward `response-metadata`.
    ///
    /// Default: `true`
    pub include_metadata: bool,

    /// Replace error details with a generic message.
    ///
    /// Applies to in-band `error` parts and to transport errors. Default: `true`
    pub mask_errors: bool,

    /// Message used when `mask_errors` is set. Defaults to "internal error".
    pub masked_error_message: Option<String>,
}

impl Default for SseOptions {
    fn default() -> Self {
        Self {
            include_start: true,
            include_metadata: true,
            mask_errors: true,
            masked_error_message: None,
        }
    }
}

impl SseOptions {
    /// Errors are forwarded verbatim.
    pub fn development() -> Self {
        Self {
            mask_errors: false,
            ..Default::default()
        }
    }

    pub fn production() -> Self {
        Self::default()
    }

    /// Content, tool, finish and error parts only.
    pub fn minimal() -> Self {
        Self {
            include_start: false,
            include_metadata: false,
            ..Default::default()
        }
    }

    fn masked_message(&self) -> String {
        self.masked_error_message
            .clone()
            .unwrap_or_else(|| DEFAULT_MASKED_ERROR.to_string())
    }
}

/// Encode each stream item as the JSON payload of one SSE frame.
///
/// Parts filtered out by `opts` yield `None`. A transport error becomes an
/// `error` part; the source stream ends after it.
pub fn encode_sse_data(
    stream: ChatStream,
    opts: SseOptions,
) -> Pin<Box<dyn Stream<Item = String> + Send>> {
    let encoded = stream.filter_map(move |item| {
        let data = match item {
            Ok(ChatStreamPart::StreamStart { .. }) if !opts.include_start => None,
            Ok(ChatStreamPart::ResponseMetadata { .. }) if !opts.include_metadata => None,
            Ok(ChatStreamPart::Error { error }) => Some(error_payload(&opts, error_text(&error))),
            Ok(part) => Some(serde_json::to_string(&part).unwrap_or_else(|e| {
                tracing::warn!(error = %e, part = part.type_name(), "failed to serialize stream part");
                error_payload(&opts, e.to_string())
            })),
            Err(e) => Some(transport_error_payload(&opts, &e)),
        };
        futures::future::ready(data)
    });
    Box::pin(encoded)
}

/// Convert a `ChatStream` into an Axum SSE response.
pub fn to_sse_response(
    stream: ChatStream,
    opts: SseOptions,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send> {
    Sse::new(encode_sse_data(stream, opts).map(|data| Ok(Event::default().data(data))))
}

/// Text deltas only, for plain `text/plain` streaming bodies.
pub fn to_text_stream(
    stream: ChatStream,
) -> Pin<Box<dyn Stream<Item = Result<String, Infallible>> + Send>> {
    let text = stream.filter_map(|item| async move {
        match item {
            Ok(ChatStreamPart::TextDelta { delta, .. }) => Some(Ok(delta)),
            Ok(ChatStreamPart::Error { error }) => {
                Some(Ok(format!("\n[Error: {}]\n", error_text(&error))))
            }
            Err(e) => Some(Ok(format!("\n[Error: {e}]\n"))),
            _ => None,
        }
    });
    Box::pin(text)
}

fn error_text(error: &serde_json::Value) -> String {
    error
        .get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| error.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

fn error_payload(opts: &SseOptions, message: String) -> String {
    let message = if opts.mask_errors {
        opts.masked_message()
    } else {
        message
    };
    json!({"type": "error", "error": message}).to_string()
}

fn transport_error_payload(opts: &SseOptions, error: &LlmError) -> String {
    tracing::debug!(error = %error, "chat stream failed while relaying SSE");
    error_payload(opts, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinishReason, Usage};
    use axum::response::IntoResponse;
    use futures::stream;

    fn sample_stream(items: Vec<Result<ChatStreamPart, LlmError>>) -> ChatStream {
        Box::pin(stream::iter(items))
    }

    fn sample_parts() -> Vec<Result<ChatStreamPart, LlmError>> {
        vec![
            Ok(ChatStreamPart::StreamStart { warnings: vec![] }),
            Ok(ChatStreamPart::ResponseMetadata {
                id: Some("resp_1".into()),
                model_id: Some("m".into()),
            }),
            Ok(ChatStreamPart::TextStart { id: "t".into() }),
            Ok(ChatStreamPart::TextDelta {
                id: "t".into(),
                delta: "hi".into(),
            }),
            Ok(ChatStreamPart::Error {
                error: json!({"code": "E1", "message": "secret detail"}),
            }),
            Ok(ChatStreamPart::TextEnd { id: "t".into() }),
            Ok(ChatStreamPart::Finish {
                finish_reason: FinishReason::Stop,
                usage: Usage::default(),
            }),
        ]
    }

    #[tokio::test]
    async fn frames_are_serialized_parts() {
        let frames: Vec<String> =
            encode_sse_data(sample_stream(sample_parts()), SseOptions::development())
                .collect()
                .await;
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[0], r#"{"type":"stream-start","warnings":[]}"#);
        assert_eq!(frames[3], r#"{"type":"text-delta","id":"t","delta":"hi"}"#);
        let error: serde_json::Value = serde_json::from_str(&frames[4]).unwrap();
        assert_eq!(error, json!({"type": "error", "error": "secret detail"}));
    }

    #[tokio::test]
    async fn production_masks_errors() {
        let mut items = sample_parts();
        items.push(Err(LlmError::StreamError("socket reset by 10.0.0.7".into())));
        let frames: Vec<String> = encode_sse_data(sample_stream(items), SseOptions::production())
            .collect()
            .await;
        assert!(frames.iter().all(|f| !f.contains("secret") && !f.contains("10.0.0.7")));
        let last: serde_json::Value = serde_json::from_str(frames.last().unwrap()).unwrap();
        assert_eq!(last, json!({"type": "error", "error": "internal error"}));
    }

    #[tokio::test]
    async fn minimal_drops_start_and_metadata() {
        let opts = SseOptions {
            masked_error_message: Some("try again".into()),
            ..SseOptions::minimal()
        };
        let frames: Vec<String> = encode_sse_data(sample_stream(sample_parts()), opts)
            .collect()
            .await;
        assert_eq!(frames.len(), 5);
        assert!(frames[0].contains("text-start"));
        assert!(frames.iter().any(|f| f.contains("try again")));
    }

    #[tokio::test]
    async fn sse_response_body_has_data_frames() {
        let response = to_sse_response(sample_stream(sample_parts()), SseOptions::minimal())
            .into_response();
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/event-stream"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("data: {\"type\":\"text-delta\",\"id\":\"t\",\"delta\":\"hi\"}\n\n"));
        assert!(body.contains("\"finishReason\":\"stop\""));
    }

    #[tokio::test]
    async fn text_stream_keeps_only_deltas_and_errors() {
        let collected: Vec<String> = to_text_stream(sample_stream(sample_parts()))
            .map(|r| r.unwrap())
            .collect()
            .await;
        assert_eq!(collected, ["hi", "\n[Error: secret detail]\n"]);
    }
}
