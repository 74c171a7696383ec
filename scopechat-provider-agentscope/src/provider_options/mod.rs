//! Provider options
//!
//! Typed per-call options read from `ChatRequest::provider_options["agentscope"]`.

mod agentscope;

pub use agentscope::AgentScopeOptions;
