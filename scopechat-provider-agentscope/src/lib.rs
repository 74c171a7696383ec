//! scopechat-provider-agentscope
//!
//! Chat adapter for AgentScope runtime servers (`/process` and SSE `/stream`).
#![deny(unsafe_code)]

// Re-export the provider-agnostic core modules so provider code can keep
// `crate::types::*` style paths.
pub use scopechat_core::{
    LlmError, defaults, error, observability, streaming, traits, types, utils,
};

pub mod provider_options;
pub mod providers;
pub mod standards;

pub use provider_options::AgentScopeOptions;
pub use providers::agentscope::{
    AgentScopeBuilder, AgentScopeChatModel, AgentScopeClient, AgentScopeConfig,
};
