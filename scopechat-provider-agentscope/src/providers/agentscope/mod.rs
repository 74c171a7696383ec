//! AgentScope provider
//!
//! Client, builder, configuration and chat model for AgentScope runtime
//! servers.

mod builder;
mod chat;
mod client;
mod config;

pub use builder::AgentScopeBuilder;
pub use chat::AgentScopeChatModel;
pub use client::AgentScopeClient;
pub use config::{
    AgentScopeConfig, DEFAULT_BASE_URL, DEFAULT_ENV_USER_ID, DEFAULT_MODEL_ID,
    DEFAULT_PROCESS_PATH, DEFAULT_STREAM_PATH,
};
