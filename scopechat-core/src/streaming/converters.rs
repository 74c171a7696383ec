//! Stream Event Converters
//!
//! The seam between SSE records and normalized stream parts.

use eventsource_stream::Event;

use super::ChatStreamPart;

/// Converts provider-specific SSE records into normalized stream parts.
///
/// A converter instance holds the decoder state of exactly one stream. It is
/// moved into that stream and dropped with it, so concurrent calls never
/// share state and no locking is needed.
pub trait SseEventConverter: Send {
    /// Parts emitted before any record is read.
    fn stream_start(&mut self) -> Vec<ChatStreamPart> {
        Vec::new()
    }

    /// Convert one non-empty, non-terminal SSE record into zero or more parts.
    fn convert_event(&mut self, event: Event) -> Vec<ChatStreamPart>;

    /// Parts emitted after the byte stream ended normally.
    fn handle_stream_end(&mut self) -> Vec<ChatStreamPart> {
        Vec::new()
    }
}
