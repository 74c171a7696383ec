//! # scopechat
//!
//! Streaming chat adapter for AgentScope runtime servers.
//!
//! A caller builds a provider-agnostic `ChatRequest`; scopechat converts it to
//! the AgentScope wire format, posts it to `/process` (single JSON body) or
//! `/stream` (SSE), and hands back either a `ChatResponse` or a live stream of
//! normalized `ChatStreamPart`s.
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use scopechat::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = scopechat::agentscope()?;
//!
//!     let response = client.chat(vec![user!("Hello!")]).await?;
//!     println!("{}", response.text());
//!
//!     let mut stream = client.chat_stream(vec![user!("Tell me a story")]).await?;
//!     while let Some(part) = stream.next().await {
//!         if let ChatStreamPart::TextDelta { delta, .. } = part? {
//!             print!("{delta}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod macros;

#[cfg(feature = "server-adapters")]
pub mod server_adapters;

pub use scopechat_core::{
    LlmError, defaults, error, observability, streaming, traits, types, utils,
};

/// Provider-specific APIs.
pub mod provider_ext {
    pub mod agentscope {
        pub use scopechat_provider_agentscope::providers::agentscope::*;
        pub use scopechat_provider_agentscope::provider_options::AgentScopeOptions;
        pub use scopechat_provider_agentscope::standards::agentscope::{
            AgentScopeEventConverter, PROVIDER_ID, convert_messages, map_finish_reason,
        };
    }
}

pub use provider_ext::agentscope::{
    AgentScopeBuilder, AgentScopeChatModel, AgentScopeClient, AgentScopeConfig, AgentScopeOptions,
};

/// AgentScope client configured from `AGENTSCOPE_*` environment variables.
///
/// Unset variables fall back to `http://localhost:8000`, `/stream`,
/// `/process` and the `demo-user` user id.
pub fn agentscope() -> Result<AgentScopeClient, LlmError> {
    AgentScopeClient::from_env()
}

pub mod prelude {
    pub use crate::provider_ext::agentscope::{
        AgentScopeBuilder, AgentScopeChatModel, AgentScopeClient, AgentScopeConfig,
        AgentScopeOptions,
    };
    pub use crate::{assistant, system, user};
    pub use scopechat_core::error::{ErrorCategory, LlmError};
    pub use scopechat_core::streaming::{ChatStream, ChatStreamHandle, ChatStreamPart};
    pub use scopechat_core::traits::ChatCapability;
    pub use scopechat_core::types::{
        ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatStreamResponse,
        CommonParams, ContentPart, FinishReason, HttpConfig, MediaSource, MessageRole,
        ResponseFormat, Tool, ToolChoice, Usage, Warning,
    };
    pub use scopechat_core::utils::cancel::CancelHandle;
}

#[doc(hidden)]
pub mod __private {
    pub use scopechat_core::types;
}
