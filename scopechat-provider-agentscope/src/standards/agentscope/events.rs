//! SSE record classification.
//!
//! AgentScope records are loosely typed. The kind of a record is resolved
//! from its `type` field, else its `object` field, else the SSE event name,
//! and the record is then classified into exactly one `EventKind`.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Run-level record: id, status and usage.
    Response,
    /// Record carrying a truthy `error` field.
    Error,
    /// Complete message with a content array.
    Message { reasoning: bool },
    PluginCall,
    PluginCallOutput,
    /// Incremental text chunk.
    Content { reasoning: bool },
    /// Anything else, keyed for warn-once logging.
    Unknown(String),
}

/// A non-empty (after trimming) string field.
pub fn non_empty_str<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Resolve the record kind: `type`, then `object`, then the SSE event name.
pub fn resolve_event_kind<'a>(
    payload: &'a Map<String, Value>,
    event_name: Option<&'a str>,
) -> Option<&'a str> {
    non_empty_str(payload, "type")
        .or_else(|| non_empty_str(payload, "object"))
        .or(event_name.filter(|s| !s.trim().is_empty()))
}

pub fn classify(payload: &Map<String, Value>, event_name: Option<&str>) -> EventKind {
    let kind = resolve_event_kind(payload, event_name);
    let object = payload.get("object").and_then(Value::as_str);
    let type_field = payload.get("type").and_then(Value::as_str);
    let reasoning =
        kind == Some("reasoning") || object == Some("reasoning") || type_field == Some("reasoning");

    if kind == Some("response") || object == Some("response") {
        return EventKind::Response;
    }
    if payload.get("error").is_some_and(is_truthy) {
        return EventKind::Error;
    }
    if kind == Some("message") || object == Some("message") {
        return EventKind::Message { reasoning };
    }
    match kind {
        Some("plugin_call_output") => return EventKind::PluginCallOutput,
        Some("plugin_call") => return EventKind::PluginCall,
        _ => {}
    }
    if matches!(kind, Some("content" | "text" | "reasoning"))
        || object == Some("content")
        || type_field == Some("text")
        || reasoning
    {
        return EventKind::Content { reasoning };
    }
    EventKind::Unknown(kind.unwrap_or("unknown").to_string())
}

/// JSON truthiness: everything except null, false, 0 and "".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Concatenated `text` of every `{"type": "text"}` item in `content`.
///
/// `None` when the message carries no text items.
pub fn message_text(message: &Map<String, Value>) -> Option<String> {
    let parts: Vec<&str> = message
        .get("content")?
        .as_array()?
        .iter()
        .filter(|item| item.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|item| item.get("text").and_then(Value::as_str))
        .collect();
    (!parts.is_empty()).then(|| parts.concat())
}
