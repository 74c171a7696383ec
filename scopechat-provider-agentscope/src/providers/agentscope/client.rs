//! AgentScope client (provider factory).

use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;

use super::builder::AgentScopeBuilder;
use super::chat::AgentScopeChatModel;
use super::config::{AgentScopeConfig, DEFAULT_MODEL_ID};
use crate::error::LlmError;
use crate::traits::ChatCapability;
use crate::types::{ChatRequest, ChatResponse, ChatStreamResponse};

/// Entry point for an AgentScope server. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AgentScopeClient {
    config: Arc<AgentScopeConfig>,
    http_client: reqwest::Client,
    default_model: String,
}

impl AgentScopeClient {
    /// Validate `config` and build an HTTP client from its `http_config`.
    pub fn new(config: AgentScopeConfig) -> Result<Self, LlmError> {
        let http_client = config.http_config.build_client()?;
        Self::with_http_client(config, http_client)
    }

    /// Use a caller-provided HTTP client.
    pub fn with_http_client(
        config: AgentScopeConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, LlmError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            http_client,
            default_model: DEFAULT_MODEL_ID.to_string(),
        })
    }

    /// Client configured from `AGENTSCOPE_*` environment variables.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(AgentScopeConfig::from_env())
    }

    pub fn builder() -> AgentScopeBuilder {
        AgentScopeBuilder::new()
    }

    pub(crate) fn with_default_model(mut self, model_id: impl Into<String>) -> Self {
        self.default_model = model_id.into();
        self
    }

    pub fn config(&self) -> &AgentScopeConfig {
        &self.config
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Chat model for `model_id`, or the default model when `None`.
    pub fn language_model(&self, model_id: Option<&str>) -> AgentScopeChatModel {
        AgentScopeChatModel::new(
            model_id.unwrap_or(&self.default_model),
            self.config.clone(),
            self.http_client.clone(),
        )
    }

    /// AgentScope serves no embedding models.
    pub fn text_embedding_model(&self, model_id: &str) -> Result<Infallible, LlmError> {
        Err(no_such_model(model_id, "textEmbeddingModel"))
    }

    /// AgentScope serves no image models.
    pub fn image_model(&self, model_id: &str) -> Result<Infallible, LlmError> {
        Err(no_such_model(model_id, "imageModel"))
    }
}

fn no_such_model(model_id: &str, model_type: &str) -> LlmError {
    LlmError::NoSuchModel {
        model_id: model_id.to_string(),
        model_type: model_type.to_string(),
    }
}

#[async_trait]
impl ChatCapability for AgentScopeClient {
    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        self.language_model(None).generate(request).await
    }

    async fn chat_stream_request(
        &self,
        request: ChatRequest,
    ) -> Result<ChatStreamResponse, LlmError> {
        self.language_model(None).stream(request).await
    }
}
