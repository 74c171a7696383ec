//! AgentScope protocol standard
//!
//! Wire types and the pure conversion pieces of the AgentScope chat protocol:
//! message conversion, status mapping, HTTP error building, usage
//! normalization, SSE event classification and the streaming decoder.

pub mod convert;
pub mod errors;
pub mod events;
pub mod finish_reason;
pub mod streaming;
pub mod types;
pub mod usage;
pub mod warnings;

pub use convert::convert_messages;
pub use errors::{assert_object, build_api_call_error};
pub use finish_reason::map_finish_reason;
pub use streaming::AgentScopeEventConverter;
pub use types::*;
pub use usage::normalize_usage;
pub use warnings::collect_warnings;

/// Provider id used for provider options and error reporting.
pub const PROVIDER_ID: &str = "agentscope";
