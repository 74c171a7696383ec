//! Protocol standards (wire formats and their converters).

pub mod agentscope;
