//! Cancellation utilities
//!
//! First-class cancellation handles for streams and in-flight requests.

use std::future::Future;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::error::LlmError;
use crate::streaming::ChatStream;

/// A handle that can be used to request cancellation.
///
/// Clones share one token: cancelling any clone cancels them all.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Streams observing this handle end at their next
    /// poll, which drops the HTTP body and closes the connection.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }

    /// Run `future` unless cancellation wins first.
    pub async fn run<F, T>(&self, future: F) -> Result<T, LlmError>
    where
        F: Future<Output = Result<T, LlmError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(LlmError::Cancelled("request cancelled".to_string())),
            res = future => res,
        }
    }
}

/// Stop yielding from `stream` once `handle` is cancelled.
///
/// Ending without a `finish` part is how consumers observe cancellation.
pub fn with_cancel(stream: ChatStream, handle: &CancelHandle) -> ChatStream {
    let token = handle.token.clone();
    let mut inner = stream;
    let s = async_stream::stream! {
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                item = inner.next() => {
                    let Some(item) = item else { break };
                    yield item;
                }
            }
        }
    };
    Box::pin(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::ChatStreamPart;

    #[tokio::test]
    async fn cancel_wakes_pending_next_immediately() {
        // A stream that never yields and never ends.
        let pending: ChatStream = Box::pin(futures::stream::pending());
        let cancel = CancelHandle::new();
        let mut s = with_cancel(pending, &cancel);

        let waiter = tokio::spawn(async move { s.next().await });
        tokio::task::yield_now().await;
        cancel.cancel();

        let out = tokio::time::timeout(std::time::Duration::from_millis(200), waiter)
            .await
            .expect("cancel should wake the waiting task")
            .expect("task ok");

        assert!(out.is_none());
    }

    #[tokio::test]
    async fn uncancelled_stream_passes_items_through() {
        let items = vec![
            Ok(ChatStreamPart::StreamStart { warnings: vec![] }),
            Ok(ChatStreamPart::TextDelta { id: "t".into(), delta: "x".into() }),
        ];
        let inner: ChatStream = Box::pin(futures::stream::iter(items));
        let handle = CancelHandle::new();
        let out: Vec<_> = with_cancel(inner, &handle).collect().await;
        assert_eq!(out.len(), 2);
    }

    #[tokio::test]
    async fn run_returns_cancelled_error() {
        let handle = CancelHandle::new();
        handle.cancel();
        let res = handle
            .run(futures::future::pending::<Result<(), LlmError>>())
            .await;
        assert!(matches!(res, Err(LlmError::Cancelled(_))));
    }
}
