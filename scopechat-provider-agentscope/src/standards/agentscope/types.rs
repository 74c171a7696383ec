//! AgentScope wire types.

use serde::{Deserialize, Serialize};

/// One content item of an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentScopeContent {
    Text {
        text: String,
    },
    Image {
        image_url: String,
    },
    /// Inline file, base64 encoded.
    File {
        file_data: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
}

impl AgentScopeContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// One outbound message. `object` and `type` are always `"message"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentScopeMessagePayload {
    pub object: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
    pub content: Vec<AgentScopeContent>,
}

impl AgentScopeMessagePayload {
    pub fn new(role: impl Into<String>, content: Vec<AgentScopeContent>) -> Self {
        Self {
            object: "message".to_string(),
            kind: "message".to_string(),
            role: role.into(),
            content,
        }
    }
}

/// Request body for both `/process` and `/stream`.
///
/// Unset sampling fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentScopeRequest {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub input: Vec<AgentScopeMessagePayload>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_uses_snake_case_tags() {
        let v = serde_json::to_value(AgentScopeContent::Image {
            image_url: "http://localhost/a.png".into(),
        })
        .unwrap();
        assert_eq!(v, serde_json::json!({"type": "image", "image_url": "http://localhost/a.png"}));
    }

    #[test]
    fn request_omits_unset_sampling_fields() {
        let req = AgentScopeRequest {
            user_id: "u1".into(),
            session_id: None,
            input: vec![AgentScopeMessagePayload::new("user", vec![AgentScopeContent::text("hi")])],
            stream: true,
            temperature: Some(0.5),
            top_p: None,
            presence_penalty: None,
            frequency_penalty: None,
            max_tokens: None,
            stop: None,
            seed: None,
            model: "agentscope-runtime".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        let obj = v.as_object().unwrap();
        assert!(!obj.contains_key("session_id"));
        assert!(!obj.contains_key("top_p"));
        assert_eq!(v["temperature"], 0.5);
        assert_eq!(v["input"][0]["object"], "message");
        assert_eq!(v["input"][0]["type"], "message");
    }
}
