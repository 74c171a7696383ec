//! Streaming Module
//!
//! Normalized stream parts, the SSE-to-part conversion seam, and the factory
//! that drives a response body through a converter.

mod converters;
mod factory;
mod part;
mod types;

pub use converters::*;
pub use factory::*;
pub use part::*;
pub use types::*;
