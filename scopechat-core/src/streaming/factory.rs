//! Stream Factory
//!
//! Drives an HTTP body through SSE framing and an `SseEventConverter`.

use bytes::Bytes;
use eventsource_stream::Eventsource;
use futures::Stream;
use futures_util::StreamExt;

use crate::error::LlmError;
use crate::streaming::{ChatStream, SseEventConverter};

/// Terminal sentinel some servers send as a final `data:` payload.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Stream Factory
pub struct StreamFactory;

impl StreamFactory {
    /// Convert a streaming HTTP response into a `ChatStream`.
    pub fn from_response<C>(response: reqwest::Response, converter: C) -> ChatStream
    where
        C: SseEventConverter + 'static,
    {
        let bytes = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| LlmError::HttpError(format!("Stream error: {e}"))));
        Self::from_byte_stream(bytes, converter)
    }

    /// Convert any byte stream carrying SSE framing into a `ChatStream`.
    ///
    /// Order of output: the converter's start parts, then the parts of each
    /// record as it is decoded, then the converter's end parts. A transport or
    /// framing error is yielded as `Err` and ends the stream without end
    /// parts. Records whose data is empty or `[DONE]` are skipped.
    pub fn from_byte_stream<S, E, C>(byte_stream: S, mut converter: C) -> ChatStream
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: std::fmt::Display + Send + 'static,
        C: SseEventConverter + 'static,
    {
        let stream = async_stream::stream! {
            for part in converter.stream_start() {
                yield Ok(part);
            }

            let mut events = Box::pin(byte_stream.eventsource());
            while let Some(event) = events.next().await {
                let event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        yield Err(LlmError::StreamError(format!("SSE parsing error: {e}")));
                        return;
                    }
                };
                let data = event.data.trim();
                if data.is_empty() || data == DONE_SENTINEL {
                    continue;
                }
                for part in converter.convert_event(event) {
                    yield Ok(part);
                }
            }

            for part in converter.handle_stream_end() {
                yield Ok(part);
            }
        };
        Box::pin(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::ChatStreamPart;
    use eventsource_stream::Event;

    /// Echoes each record's data as a text delta.
    struct EchoConverter;

    impl SseEventConverter for EchoConverter {
        fn stream_start(&mut self) -> Vec<ChatStreamPart> {
            vec![ChatStreamPart::StreamStart { warnings: vec![] }]
        }

        fn convert_event(&mut self, event: Event) -> Vec<ChatStreamPart> {
            vec![ChatStreamPart::TextDelta {
                id: event.event,
                delta: event.data,
            }]
        }

        fn handle_stream_end(&mut self) -> Vec<ChatStreamPart> {
            vec![ChatStreamPart::TextEnd { id: "end".into() }]
        }
    }

    fn chunks(parts: &[&'static str]) -> impl Stream<Item = Result<Bytes, LlmError>> + Send + 'static {
        let items: Vec<Result<Bytes, LlmError>> =
            parts.iter().map(|p| Ok(Bytes::from_static(p.as_bytes()))).collect();
        futures::stream::iter(items)
    }

    #[tokio::test]
    async fn skips_done_and_empty_records() {
        let body = chunks(&[
            "event: message\ndata: a\n\n",
            "data:\n\n",
            "data: [DONE]\n\n",
            "event: custom\nda",
            "ta: b\n\n",
        ]);
        let parts: Vec<_> = StreamFactory::from_byte_stream(body, EchoConverter)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(parts.len(), 4);
        assert!(matches!(parts[0], ChatStreamPart::StreamStart { .. }));
        assert_eq!(
            parts[1],
            ChatStreamPart::TextDelta { id: "message".into(), delta: "a".into() }
        );
        assert_eq!(
            parts[2],
            ChatStreamPart::TextDelta { id: "custom".into(), delta: "b".into() }
        );
        assert!(matches!(parts[3], ChatStreamPart::TextEnd { .. }));
    }

    #[tokio::test]
    async fn transport_error_ends_stream_without_end_parts() {
        let items: Vec<Result<Bytes, LlmError>> = vec![
            Ok(Bytes::from_static(b"data: a\n\n")),
            Err(LlmError::HttpError("connection reset".into())),
            Ok(Bytes::from_static(b"data: b\n\n")),
        ];
        let out: Vec<_> = StreamFactory::from_byte_stream(futures::stream::iter(items), EchoConverter)
            .collect()
            .await;

        assert_eq!(out.len(), 3);
        assert!(out[1].is_ok());
        assert!(matches!(out[2], Err(LlmError::StreamError(_))));
    }
}
