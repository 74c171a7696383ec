//! Chat response types.

use serde::{Deserialize, Serialize};

use super::{ContentPart, FinishReason, HttpRequestInfo, HttpResponseInfo, Usage, Warning};
use crate::streaming::ChatStream;

/// Result of a single-shot chat call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant content (text parts).
    pub content: Vec<ContentPart>,
    pub finish_reason: FinishReason,
    pub usage: Usage,
    #[serde(default)]
    pub warnings: Vec<Warning>,
    /// What was sent.
    pub request: HttpRequestInfo,
    /// Response headers and parsed body.
    pub response: HttpResponseInfo,
}

impl ChatResponse {
    /// All text parts concatenated.
    pub fn text(&self) -> String {
        self.content.iter().filter_map(ContentPart::as_text).collect()
    }
}

/// Result of a streaming chat call: the live part stream plus diagnostics.
pub struct ChatStreamResponse {
    pub stream: ChatStream,
    pub request: HttpRequestInfo,
    pub response: HttpResponseInfo,
}

impl std::fmt::Debug for ChatStreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStreamResponse")
            .field("request", &self.request)
            .field("response", &self.response)
            .finish_non_exhaustive()
    }
}
