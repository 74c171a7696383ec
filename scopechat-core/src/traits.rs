//! Capability traits implemented by providers.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::streaming::{ChatStream, ChatStreamHandle};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ChatStreamResponse};
use crate::utils::cancel::{CancelHandle, with_cancel};

#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Single-shot call.
    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;

    /// Streaming call. Returns as soon as the response headers arrive.
    async fn chat_stream_request(&self, request: ChatRequest)
    -> Result<ChatStreamResponse, LlmError>;

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, LlmError> {
        self.chat_request(ChatRequest::new(messages)).await
    }

    async fn chat_stream(&self, messages: Vec<ChatMessage>) -> Result<ChatStream, LlmError> {
        let request = ChatRequest::new(messages).with_streaming(true);
        Ok(self.chat_stream_request(request).await?.stream)
    }

    /// Streaming call paired with a cancel handle.
    ///
    /// Reuses `request.cancel` when the caller already supplied one, so the
    /// same handle also aborts the handshake.
    async fn chat_stream_with_cancel(
        &self,
        mut request: ChatRequest,
    ) -> Result<ChatStreamHandle, LlmError> {
        let cancel = request.cancel.get_or_insert_with(CancelHandle::new).clone();
        let response = self.chat_stream_request(request).await?;
        Ok(ChatStreamHandle {
            stream: with_cancel(response.stream, &cancel),
            cancel,
        })
    }
}
