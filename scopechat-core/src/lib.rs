//! scopechat-core
//!
//! Provider-agnostic types, errors, and streaming primitives shared by the
//! scopechat provider crates.
#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod observability;
pub mod streaming;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::LlmError;
