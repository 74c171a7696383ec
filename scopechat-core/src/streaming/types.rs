//! Core Streaming Types

use futures::Stream;
use std::pin::Pin;

use super::ChatStreamPart;
use crate::error::LlmError;

/// Chat Stream - the live sequence of normalized parts for one call.
///
/// Transport and framing failures surface as `Err` items and end the stream;
/// per-record decode problems arrive in-band as `ChatStreamPart::Error`.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatStreamPart, LlmError>> + Send>>;

/// Chat stream with first-class cancellation handle
///
/// ```rust,ignore
/// let handle = model.chat_stream_with_cancel(request).await?;
/// // ... consume handle.stream
/// handle.cancel.cancel();
/// ```
pub struct ChatStreamHandle {
    /// The underlying chat stream
    pub stream: ChatStream,
    /// Handle to cancel the stream
    pub cancel: crate::utils::cancel::CancelHandle,
}
