//! Relay AgentScope output to browsers as normalized SSE parts.
//!
//! ```bash
//! cargo run -p scopechat --features server-adapters --example sse_relay
//! curl -N -X POST localhost:3000/chat -H 'content-type: application/json' \
//!     -d '[{"role":"user","content":[{"type":"text","text":"hi"}]}]'
//! ```

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use scopechat::prelude::*;
use scopechat::server_adapters::axum::{SseOptions, to_sse_response};

async fn chat(
    State(client): State<AgentScopeClient>,
    Json(messages): Json<Vec<ChatMessage>>,
) -> Response {
    match client.chat_stream(messages).await {
        Ok(stream) => to_sse_response(stream, SseOptions::production()).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "chat stream failed to start");
            let status = if e.category() == ErrorCategory::Validation {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, e.to_string()).into_response()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = scopechat::observability::init_tracing_from_env()?;
    let client = scopechat::agentscope()?;

    let app = Router::new().route("/chat", post(chat)).with_state(client);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await?;
    Ok(())
}
