//! Server adapters for re-streaming chat output to web clients.

pub mod axum;
