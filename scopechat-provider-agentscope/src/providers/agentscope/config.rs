//! AgentScope client configuration.

use std::collections::HashMap;

use crate::error::LlmError;
use crate::types::HttpConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_STREAM_PATH: &str = "/stream";
pub const DEFAULT_PROCESS_PATH: &str = "/process";
/// User id used by `from_env` when `AGENTSCOPE_USER_ID` is unset.
pub const DEFAULT_ENV_USER_ID: &str = "demo-user";
pub const DEFAULT_MODEL_ID: &str = "agentscope-runtime";

/// Configuration for an AgentScope runtime server.
#[derive(Debug, Clone)]
pub struct AgentScopeConfig {
    /// Server root, without trailing slash.
    pub base_url: String,
    pub stream_path: String,
    pub process_path: String,
    /// Default user id; a per-call `userId` option overrides it.
    pub user_id: Option<String>,
    /// Default session id; a per-call `sessionId` option overrides it.
    pub session_id: Option<String>,
    /// Default headers, lowest precedence.
    pub headers: HashMap<String, String>,
    pub http_config: HttpConfig,
    /// Log unrecognized SSE event kinds (once per kind per stream).
    pub warn_unknown_events: bool,
}

impl Default for AgentScopeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stream_path: DEFAULT_STREAM_PATH.to_string(),
            process_path: DEFAULT_PROCESS_PATH.to_string(),
            user_id: None,
            session_id: None,
            headers: HashMap::new(),
            http_config: HttpConfig::default(),
            warn_unknown_events: true,
        }
    }
}

impl AgentScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `AGENTSCOPE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            base_url: var("AGENTSCOPE_BASE_URL")
                .map(|url| without_trailing_slash(&url))
                .unwrap_or(defaults.base_url),
            stream_path: var("AGENTSCOPE_STREAM_PATH").unwrap_or(defaults.stream_path),
            process_path: var("AGENTSCOPE_PROCESS_PATH").unwrap_or(defaults.process_path),
            user_id: Some(var("AGENTSCOPE_USER_ID").unwrap_or_else(|| DEFAULT_ENV_USER_ID.to_string())),
            session_id: var("AGENTSCOPE_SESSION_ID"),
            ..defaults
        }
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = without_trailing_slash(base_url.as_ref());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_warn_unknown_events(mut self, enabled: bool) -> Self {
        self.warn_unknown_events = enabled;
        self
    }

    pub fn stream_url(&self) -> String {
        format!("{}{}", self.base_url, self.stream_path)
    }

    pub fn process_url(&self) -> String {
        format!("{}{}", self.base_url, self.process_path)
    }

    pub fn validate(&self) -> Result<(), LlmError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(LlmError::ConfigurationError(
                "AgentScope base_url cannot be empty".to_string(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(LlmError::ConfigurationError(format!(
                "AgentScope base_url must start with http:// or https://, got '{base}'"
            )));
        }
        for (name, path) in [
            ("stream_path", &self.stream_path),
            ("process_path", &self.process_path),
        ] {
            if !path.starts_with('/') {
                return Err(LlmError::ConfigurationError(format!(
                    "AgentScope {name} must start with '/', got '{path}'"
                )));
            }
        }
        Ok(())
    }
}

fn without_trailing_slash(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_point_at_local_runtime() {
        let cfg = AgentScopeConfig::default();
        assert_eq!(cfg.stream_url(), "http://localhost:8000/stream");
        assert_eq!(cfg.process_url(), "http://localhost:8000/process");
        assert_eq!(cfg.user_id, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn env_lookup_applies_overrides_and_user_fallback() {
        let cfg = AgentScopeConfig::from_lookup(lookup(&[
            ("AGENTSCOPE_BASE_URL", "https://agents.example.com/"),
            ("AGENTSCOPE_SESSION_ID", "s1"),
            ("AGENTSCOPE_STREAM_PATH", "/v2/stream"),
        ]));
        assert_eq!(cfg.base_url, "https://agents.example.com");
        assert_eq!(cfg.stream_url(), "https://agents.example.com/v2/stream");
        assert_eq!(cfg.process_path, DEFAULT_PROCESS_PATH);
        assert_eq!(cfg.user_id.as_deref(), Some(DEFAULT_ENV_USER_ID));
        assert_eq!(cfg.session_id.as_deref(), Some("s1"));

        let cfg = AgentScopeConfig::from_lookup(lookup(&[("AGENTSCOPE_USER_ID", "alice")]));
        assert_eq!(cfg.user_id.as_deref(), Some("alice"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn validate_rejects_bad_urls_and_paths() {
        assert!(AgentScopeConfig::new().with_base_url("").validate().is_err());
        assert!(AgentScopeConfig::new().with_base_url("ftp://x").validate().is_err());
        let mut cfg = AgentScopeConfig::new();
        cfg.process_path = "process".into();
        assert!(matches!(cfg.validate(), Err(LlmError::ConfigurationError(_))));
    }
}
