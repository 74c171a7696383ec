//! Stream a reply from an AgentScope runtime and print it as it arrives.
//!
//! ```bash
//! AGENTSCOPE_BASE_URL=http://localhost:8000 SCOPECHAT_LOG_LEVEL=debug \
//!     cargo run -p scopechat --example stream_chat -- "What is AgentScope?"
//! ```

use std::io::Write;

use futures::StreamExt;
use scopechat::observability::init_tracing_from_env;
use scopechat::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_tracing_from_env()?;

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Say hello in three languages.".to_string());
    let client = scopechat::agentscope()?;

    let request = ChatRequest::builder()
        .message(system!("You are a concise assistant."))
        .message(user!(prompt))
        .stream(true)
        .build();
    let handle = client.chat_stream_with_cancel(request).await?;

    let cancel = handle.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let mut stream = handle.stream;
    let mut out = std::io::stdout();
    while let Some(part) = stream.next().await {
        match part? {
            ChatStreamPart::ReasoningDelta { delta, .. } => eprint!("{delta}"),
            ChatStreamPart::TextDelta { delta, .. } => {
                print!("{delta}");
                out.flush()?;
            }
            ChatStreamPart::ToolCall { tool_name, input, .. } => {
                eprintln!("\n[tool {tool_name}] {input}");
            }
            ChatStreamPart::Error { error } => eprintln!("\n[error] {error}"),
            ChatStreamPart::Finish { finish_reason, usage } => {
                println!();
                eprintln!("finish: {finish_reason}, total tokens: {:?}", usage.total_tokens);
            }
            _ => {}
        }
    }
    Ok(())
}
