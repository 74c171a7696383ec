//! Observability
//!
//! Tracing subscriber bootstrap for binaries and tests embedding scopechat.
//! Library code only emits `tracing` events; nothing here is required.

mod subscriber;

pub use subscriber::*;
