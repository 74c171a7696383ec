//! AgentScope provider options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::standards::agentscope::PROVIDER_ID;
use crate::types::ChatRequest;

/// Per-call AgentScope options.
///
/// ```rust,ignore
/// let request = ChatRequest::builder()
///     .message(ChatMessage::user("hi").build())
///     .provider_option("agentscope", AgentScopeOptions::new().with_user_id("u1").to_value()?)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentScopeOptions {
    /// Overrides the configured user id.
    #[serde(default, alias = "user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Overrides the configured session id.
    #[serde(default, alias = "session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Extra headers; call-level request headers still win.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl AgentScopeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn to_value(&self) -> Result<serde_json::Value, LlmError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse the `agentscope` entry of a request; absent means defaults.
    pub fn from_request(request: &ChatRequest) -> Result<Self, LlmError> {
        match request.provider_option(PROVIDER_ID) {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                LlmError::invalid_argument(
                    "providerOptions.agentscope",
                    format!("invalid AgentScope provider options: {e}"),
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with(value: serde_json::Value) -> ChatRequest {
        ChatRequest::builder()
            .provider_option(PROVIDER_ID, value)
            .build()
    }

    #[test]
    fn parses_camel_case_and_snake_case() {
        let opts = AgentScopeOptions::from_request(&request_with(json!({
            "userId": "u1", "session_id": "s1", "headers": {"x-a": "1"}
        })))
        .unwrap();
        assert_eq!(opts.user_id.as_deref(), Some("u1"));
        assert_eq!(opts.session_id.as_deref(), Some("s1"));
        assert_eq!(opts.headers.get("x-a").map(String::as_str), Some("1"));
    }

    #[test]
    fn absent_options_are_defaults() {
        let opts = AgentScopeOptions::from_request(&ChatRequest::default()).unwrap();
        assert_eq!(opts, AgentScopeOptions::default());
    }

    #[test]
    fn shape_mismatch_is_invalid_argument() {
        let err = AgentScopeOptions::from_request(&request_with(json!({"userId": 42}))).unwrap_err();
        assert!(matches!(err, LlmError::InvalidArgument { .. }));
        let err = AgentScopeOptions::from_request(&request_with(json!("u1"))).unwrap_err();
        assert!(matches!(err, LlmError::InvalidArgument { .. }));
    }

    #[test]
    fn to_value_uses_camel_case() {
        let v = AgentScopeOptions::new().with_user_id("u1").to_value().unwrap();
        assert_eq!(v, json!({"userId": "u1"}));
    }
}
