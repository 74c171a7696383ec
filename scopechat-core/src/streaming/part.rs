//! Normalized stream parts.
//!
//! The wire shape follows the Vercel AI SDK stream-part union: a kebab-case
//! `type` tag and camelCase fields, so parts can be re-streamed to web
//! clients as `data: {json}\n\n` frames without translation.

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::types::{FinishReason, Usage, Warning};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChatStreamPart {
    /// Always the first part of a stream.
    StreamStart {
        #[serde(default)]
        warnings: Vec<Warning>,
    },
    ResponseMetadata {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "modelId")]
        model_id: Option<String>,
    },

    TextStart {
        id: String,
    },
    TextDelta {
        id: String,
        delta: String,
    },
    TextEnd {
        id: String,
    },

    ReasoningStart {
        id: String,
    },
    ReasoningDelta {
        id: String,
        delta: String,
    },
    ReasoningEnd {
        id: String,
    },

    ToolCall {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        /// Stringified tool arguments.
        input: String,
        #[serde(default, rename = "providerExecuted")]
        provider_executed: bool,
    },
    ToolResult {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        result: serde_json::Value,
        #[serde(default, rename = "providerExecuted")]
        provider_executed: bool,
    },

    /// Always the last part of a stream that ran to completion.
    Finish {
        #[serde(rename = "finishReason")]
        finish_reason: FinishReason,
        usage: Usage,
    },
    /// A recoverable, in-band error. The stream keeps going.
    Error {
        error: serde_json::Value,
    },
}

impl ChatStreamPart {
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::Error {
            error: serde_json::Value::String(message.into()),
        }
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, Self::Finish { .. })
    }

    /// The `type` tag this part serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::StreamStart { .. } => "stream-start",
            Self::ResponseMetadata { .. } => "response-metadata",
            Self::TextStart { .. } => "text-start",
            Self::TextDelta { .. } => "text-delta",
            Self::TextEnd { .. } => "text-end",
            Self::ReasoningStart { .. } => "reasoning-start",
            Self::ReasoningDelta { .. } => "reasoning-delta",
            Self::ReasoningEnd { .. } => "reasoning-end",
            Self::ToolCall { .. } => "tool-call",
            Self::ToolResult { .. } => "tool-result",
            Self::Finish { .. } => "finish",
            Self::Error { .. } => "error",
        }
    }

    /// Format as a single SSE frame (`data: {json}\n\n`).
    pub fn to_sse_frame(&self) -> Result<String, LlmError> {
        let json = serde_json::to_string(self)?;
        Ok(format!("data: {json}\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_delta_wire_shape() {
        let part = ChatStreamPart::TextDelta {
            id: "t1".into(),
            delta: "hello".into(),
        };
        let v = serde_json::to_value(&part).unwrap();
        assert_eq!(v, serde_json::json!({"type": "text-delta", "id": "t1", "delta": "hello"}));
        assert_eq!(part.type_name(), "text-delta");
    }

    #[test]
    fn finish_wire_shape_uses_camel_case() {
        let part = ChatStreamPart::Finish {
            finish_reason: FinishReason::Stop,
            usage: Usage {
                total_tokens: Some(5),
                ..Default::default()
            },
        };
        let v = serde_json::to_value(&part).unwrap();
        assert_eq!(v["type"], "finish");
        assert_eq!(v["finishReason"], "stop");
        assert_eq!(v["usage"]["totalTokens"], 5);
        assert!(part.is_finish());
    }

    #[test]
    fn tool_call_round_trips_through_json() {
        let raw = r#"{"type":"tool-call","toolCallId":"c1","toolName":"search","input":"{}","providerExecuted":true}"#;
        let part: ChatStreamPart = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            part,
            ChatStreamPart::ToolCall { ref tool_name, provider_executed: true, .. } if tool_name == "search"
        ));
    }

    #[test]
    fn sse_frame_is_data_line_plus_blank_line() {
        let frame = ChatStreamPart::error_message("bad").to_sse_frame().unwrap();
        assert_eq!(frame, "data: {\"type\":\"error\",\"error\":\"bad\"}\n\n");
    }
}
