//! Test fixtures utilities: load SSE chunks and drive converters

use bytes::Bytes;
use futures_util::StreamExt;
use std::io;

use scopechat_provider_agentscope::streaming::{ChatStreamPart, SseEventConverter, StreamFactory};

/// Fixture path relative to this crate.
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/agentscope/{name}", env!("CARGO_MANIFEST_DIR"))
}

/// Load an `.sse` fixture file and split it into SSE records (separated by blank lines), returning a byte stream
pub fn load_sse_fixture_as_bytes(path: &str) -> io::Result<Vec<Result<Bytes, io::Error>>> {
    let raw = std::fs::read_to_string(path)?;
    // Normalize line endings
    let normalized = raw.replace("\r\n", "\n");
    let mut out = Vec::new();
    for chunk in normalized.split("\n\n") {
        let s = chunk.trim_end_matches('\n');
        if s.is_empty() {
            continue;
        }
        // Restore SSE event blank line terminator
        let mut owned = String::from(s);
        owned.push_str("\n\n");
        out.push(Ok(Bytes::from(owned)));
    }
    Ok(out)
}

/// Run byte chunks through `StreamFactory` with the given converter and collect the parts.
pub async fn collect_sse_parts<C>(
    bytes: Vec<Result<Bytes, io::Error>>,
    converter: C,
) -> Vec<ChatStreamPart>
where
    C: SseEventConverter + 'static,
{
    let stream = StreamFactory::from_byte_stream(futures_util::stream::iter(bytes), converter);
    stream
        .map(|item| item.expect("stream item ok"))
        .collect()
        .await
}

/// Serialized `type` tags of the parts, in order.
pub fn part_types(parts: &[ChatStreamPart]) -> Vec<&'static str> {
    parts.iter().map(ChatStreamPart::type_name).collect()
}
