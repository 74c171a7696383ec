//! Provider implementations.

pub mod agentscope;
