//! Conversation → AgentScope message conversion.
//!
//! User turns are strict (an unsupported part is an error); assistant turns
//! are lenient (reasoning is flattened to text, anything else is dropped).
//! Every produced message carries at least one content item.

use crate::error::LlmError;
use crate::types::{ChatMessage, ContentPart, MediaSource, MessageRole};

use super::types::{AgentScopeContent, AgentScopeMessagePayload};

/// Convert an ordered conversation into AgentScope messages.
pub fn convert_messages(messages: &[ChatMessage]) -> Result<Vec<AgentScopeMessagePayload>, LlmError> {
    messages.iter().map(convert_message).collect()
}

fn convert_message(message: &ChatMessage) -> Result<AgentScopeMessagePayload, LlmError> {
    let content = match message.role {
        MessageRole::System => vec![AgentScopeContent::text(message.text())],
        MessageRole::User => message
            .content
            .iter()
            .map(convert_user_part)
            .collect::<Result<Vec<_>, _>>()?,
        MessageRole::Assistant => message
            .content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } | ContentPart::Reasoning { text } => {
                    Some(AgentScopeContent::text(text.clone()))
                }
                _ => None,
            })
            .collect(),
        MessageRole::Tool => {
            return Err(LlmError::UnsupportedRole(format!(
                "AgentScope does not accept '{}' messages",
                message.role
            )));
        }
    };

    Ok(AgentScopeMessagePayload::new(
        message.role.as_str(),
        non_empty(content),
    ))
}

fn convert_user_part(part: &ContentPart) -> Result<AgentScopeContent, LlmError> {
    match part {
        ContentPart::Text { text } => Ok(AgentScopeContent::text(text.clone())),
        ContentPart::File {
            source, filename, ..
        } => Ok(match source {
            MediaSource::Url { url } => AgentScopeContent::Image {
                image_url: url.clone(),
            },
            inline => AgentScopeContent::File {
                file_data: inline.as_base64().unwrap_or_default(),
                filename: filename.clone(),
            },
        }),
        other => Err(LlmError::UnsupportedContent(format!(
            "user message part '{}' is not supported by AgentScope",
            other.kind()
        ))),
    }
}

/// The server rejects empty content arrays.
fn non_empty(mut content: Vec<AgentScopeContent>) -> Vec<AgentScopeContent> {
    if content.is_empty() {
        content.push(AgentScopeContent::text(""));
    }
    content
}
