//! Utilities shared by providers.

pub mod cancel;
pub mod headers;
