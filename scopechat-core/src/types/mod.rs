//! Provider-agnostic data types.

mod common;
mod http;
mod message;
mod params;
mod request;
mod response;
mod tools;

pub use common::*;
pub use http::*;
pub use message::*;
pub use params::*;
pub use request::*;
pub use response::*;
pub use tools::*;
