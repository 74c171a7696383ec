//! AgentScope builder

use std::time::Duration;

use super::client::AgentScopeClient;
use super::config::AgentScopeConfig;
use crate::error::LlmError;

/// Fluent builder for `AgentScopeClient`.
///
/// ```rust,ignore
/// let client = AgentScopeClient::builder()
///     .base_url("http://localhost:8000")
///     .user_id("u1")
///     .header("x-tenant", "acme")
///     .build()?;
/// let model = client.language_model(None);
/// ```
#[derive(Debug, Default)]
pub struct AgentScopeBuilder {
    config: AgentScopeConfig,
    http_client: Option<reqwest::Client>,
    model: Option<String>,
}

impl AgentScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (e.g. `AgentScopeConfig::from_env()`).
    pub fn from_config(config: AgentScopeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    pub fn stream_path(mut self, path: impl Into<String>) -> Self {
        self.config.stream_path = path.into();
        self
    }

    pub fn process_path(mut self, path: impl Into<String>) -> Self {
        self.config.process_path = path.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.config.user_id = Some(user_id.into());
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.config.session_id = Some(session_id.into());
        self
    }

    /// Default model id for `language_model(None)`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Default header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Use a caller-provided HTTP client; timeouts and proxy are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn warn_unknown_events(mut self, enabled: bool) -> Self {
        self.config = self.config.with_warn_unknown_events(enabled);
        self
    }

    pub fn build(self) -> Result<AgentScopeClient, LlmError> {
        let client = match self.http_client {
            Some(http) => AgentScopeClient::with_http_client(self.config, http)?,
            None => AgentScopeClient::new(self.config)?,
        };
        Ok(match self.model {
            Some(model) => client.with_default_model(model),
            None => client,
        })
    }
}
