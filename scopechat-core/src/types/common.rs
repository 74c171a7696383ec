//! Shared value types: finish reasons, usage, warnings.

use serde::{Deserialize, Serialize};

/// Reason why the model stopped generating tokens.
///
/// Serialized in kebab-case (`content-filter`, `tool-calls`), matching the
/// stream part wire shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Model reached the maximum number of tokens.
    Length,
    /// Content was filtered or the request was rejected by policy.
    ContentFilter,
    /// Model triggered tool calls.
    ToolCalls,
    /// An error occurred during generation.
    Error,
    /// Provider-specific reason, e.g. a cancelled run.
    Other,
    /// No (or an unrecognized) finish reason was reported.
    #[default]
    Unknown,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Length => "length",
            Self::ContentFilter => "content-filter",
            Self::ToolCalls => "tool-calls",
            Self::Error => "error",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token usage. Every field stays `None` until the provider reports it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub reasoning_tokens: Option<u64>,
    pub cached_input_tokens: Option<u64>,
}

impl Usage {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Non-fatal call warning (an ignored setting or tool).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Warning {
    UnsupportedTool {
        #[serde(rename = "toolName")]
        tool_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    UnsupportedSetting {
        setting: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Other {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_serializes_kebab_case() {
        let v = serde_json::to_value(FinishReason::ContentFilter).unwrap();
        assert_eq!(v, serde_json::json!("content-filter"));
        assert_eq!(FinishReason::default(), FinishReason::Unknown);
    }

    #[test]
    fn usage_defaults_to_unset_fields() {
        let usage = Usage::default();
        assert!(usage.is_empty());
        let v = serde_json::to_value(usage).unwrap();
        assert!(v["totalTokens"].is_null());
    }
}
