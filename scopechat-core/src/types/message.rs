//! Chat message types

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Tool => "tool",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media source - a file reference is either a URL or inline data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MediaSource {
    /// URL (http, https, data URLs, etc.)
    Url { url: String },
    /// Already base64-encoded data
    Base64 { data: String },
    /// Raw bytes (base64-encoded when sent)
    #[serde(skip)]
    Binary { data: Vec<u8> },
}

impl MediaSource {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn base64(data: impl Into<String>) -> Self {
        Self::Base64 { data: data.into() }
    }

    pub fn binary(data: Vec<u8>) -> Self {
        Self::Binary { data }
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url { url } => Some(url),
            _ => None,
        }
    }

    /// Get as base64 if available, encoding raw bytes on demand.
    pub fn as_base64(&self) -> Option<String> {
        match self {
            Self::Base64 { data } => Some(data.clone()),
            Self::Binary { data } => Some(base64::engine::general_purpose::STANDARD.encode(data)),
            Self::Url { .. } => None,
        }
    }
}

/// Content part - provider-agnostic message content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentPart {
    Text {
        text: String,
    },
    /// File or image reference
    File {
        #[serde(flatten)]
        source: MediaSource,
        #[serde(rename = "mediaType")]
        media_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
    /// Model reasoning carried over from an earlier assistant turn
    Reasoning {
        text: String,
    },
    ToolCall {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        input: serde_json::Value,
    },
    ToolResult {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        output: serde_json::Value,
    },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn reasoning(text: impl Into<String>) -> Self {
        Self::Reasoning { text: text.into() }
    }

    pub fn file(source: MediaSource, media_type: impl Into<String>) -> Self {
        Self::File {
            source,
            media_type: media_type.into(),
            filename: None,
        }
    }

    pub fn image_url(url: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self::file(MediaSource::url(url), media_type)
    }

    pub fn tool_call(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        input: serde_json::Value,
    ) -> Self {
        Self::ToolCall {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            input,
        }
    }

    pub fn tool_result(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: serde_json::Value,
    ) -> Self {
        Self::ToolResult {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            output,
        }
    }

    /// Short kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::File { .. } => "file",
            Self::Reasoning { .. } => "reasoning",
            Self::ToolCall { .. } => "tool-call",
            Self::ToolResult { .. } => "tool-result",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Chat message
///
/// One conversation turn: a role plus an ordered list of content parts.
///
/// ```rust,ignore
/// use scopechat_core::types::{ChatMessage, ContentPart};
///
/// let msg = ChatMessage::user("Describe this picture")
///     .with_image_url("https://example.com/cat.png", "image/png")
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> ChatMessageBuilder {
        ChatMessageBuilder::new(MessageRole::System).with_text(content)
    }

    pub fn user<S: Into<String>>(content: S) -> ChatMessageBuilder {
        ChatMessageBuilder::new(MessageRole::User).with_text(content)
    }

    pub fn assistant<S: Into<String>>(content: S) -> ChatMessageBuilder {
        ChatMessageBuilder::new(MessageRole::Assistant).with_text(content)
    }

    pub fn with_parts(role: MessageRole, content: Vec<ContentPart>) -> ChatMessageBuilder {
        ChatMessageBuilder { role, content }
    }

    /// All text parts joined together.
    pub fn text(&self) -> String {
        self.content.iter().filter_map(ContentPart::as_text).collect()
    }
}

/// Builder for `ChatMessage`
#[derive(Debug, Clone)]
pub struct ChatMessageBuilder {
    role: MessageRole,
    content: Vec<ContentPart>,
}

impl ChatMessageBuilder {
    pub fn new(role: MessageRole) -> Self {
        Self {
            role,
            content: Vec::new(),
        }
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.content.push(ContentPart::text(text));
        self
    }

    pub fn with_reasoning<S: Into<String>>(mut self, text: S) -> Self {
        self.content.push(ContentPart::reasoning(text));
        self
    }

    pub fn with_image_url<S: Into<String>, M: Into<String>>(mut self, url: S, media_type: M) -> Self {
        self.content.push(ContentPart::image_url(url, media_type));
        self
    }

    pub fn with_file_bytes<M: Into<String>>(
        mut self,
        data: Vec<u8>,
        media_type: M,
        filename: Option<String>,
    ) -> Self {
        self.content.push(ContentPart::File {
            source: MediaSource::binary(data),
            media_type: media_type.into(),
            filename,
        });
        self
    }

    pub fn with_part(mut self, part: ContentPart) -> Self {
        self.content.push(part);
        self
    }

    pub fn build(self) -> ChatMessage {
        ChatMessage {
            role: self.role,
            content: self.content,
        }
    }
}
