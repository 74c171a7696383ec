//! Error Handling Module
//!
//! One error type (`LlmError`) is shared by every scopechat crate. Transport
//! failures carry a structured `ApiCallError` so callers can decide on retry
//! policy themselves; nothing in this workspace retries on its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use scopechat_core::error::{ErrorCategory, LlmError};
//!
//! let error = LlmError::invalid_argument("userId", "user id must not be empty");
//! assert_eq!(error.category(), ErrorCategory::Validation);
//! assert!(!error.is_retryable());
//! ```

mod conversions;
pub mod types;

pub use types::*;
