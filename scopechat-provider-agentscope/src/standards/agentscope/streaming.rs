//! AgentScope SSE decoder
//!
//! Reduces AgentScope SSE records into normalized stream parts. One
//! converter owns the state of one stream.
//!
//! Text and reasoning each form a single logical stream per call: the id is
//! fixed on the first delta of that kind (the vendor id when non-empty, else
//! a placeholder) and every later delta reuses it, whatever ids later
//! records carry.

use std::collections::HashSet;

use eventsource_stream::Event;
use serde_json::{Map, Value};

use crate::streaming::{ChatStreamPart, SseEventConverter};
use crate::types::{FinishReason, Usage, Warning};

use super::events::{EventKind, classify, message_text, non_empty_str};
use super::finish_reason::map_finish_reason;
use super::usage::normalize_usage;

const TEXT_PLACEHOLDER_ID: &str = "agentscope-text-0";
const REASONING_PLACEHOLDER_ID: &str = "agentscope-reasoning-0";

/// Insertion-ordered set of stream ids that have emitted a start marker.
#[derive(Debug, Default)]
struct StartedIds {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl StartedIds {
    /// Returns `true` when `id` was not started before.
    fn insert(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string());
        self.order.push(id.to_string());
        true
    }

    fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.seen.clear();
        self.order.drain(..)
    }
}

#[derive(Debug, Default)]
struct DecoderState {
    finish_reason: FinishReason,
    text_id: Option<String>,
    reasoning_id: Option<String>,
    started_text: StartedIds,
    started_reasoning: StartedIds,
    started_tool_calls: HashSet<String>,
    usage: Usage,
    response_id: Option<String>,
    warned_kinds: HashSet<String>,
}

/// Tool name, call id, input and result pulled from a plugin record.
#[derive(Debug, Clone, PartialEq)]
struct ToolMeta {
    tool_name: String,
    tool_call_id: String,
    input: Option<Value>,
    result: Option<Value>,
}

#[derive(Debug)]
pub struct AgentScopeEventConverter {
    model_id: String,
    warnings: Vec<Warning>,
    warn_unknown_events: bool,
    state: DecoderState,
}

impl AgentScopeEventConverter {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            warnings: Vec::new(),
            warn_unknown_events: true,
            state: DecoderState::default(),
        }
    }

    /// Warnings reported in the `stream-start` part.
    pub fn with_warnings(mut self, warnings: Vec<Warning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_warn_unknown_events(mut self, enabled: bool) -> Self {
        self.warn_unknown_events = enabled;
        self
    }

    pub fn finish_reason(&self) -> FinishReason {
        self.state.finish_reason
    }

    fn convert_record(&mut self, event_name: Option<&str>, data: &str) -> Vec<ChatStreamPart> {
        let parsed: Value = match serde_json::from_str(data) {
            Ok(v) => v,
            Err(e) => return self.record_failure(format!("invalid JSON in SSE record: {e}")),
        };
        let Some(payload) = parsed.as_object() else {
            return self.record_failure("SSE record is not a JSON object".to_string());
        };

        if let Some(status) = payload.get("status").and_then(Value::as_str) {
            let mapped = map_finish_reason(Some(status));
            if mapped != FinishReason::Unknown {
                self.state.finish_reason = mapped;
            }
        }

        let mut out = Vec::new();
        match classify(payload, event_name) {
            EventKind::Response => self.on_response(payload, &mut out),
            EventKind::Error => {
                self.state.finish_reason = FinishReason::Error;
                out.push(ChatStreamPart::Error {
                    error: payload.get("error").cloned().unwrap_or(Value::Null),
                });
            }
            EventKind::Message { reasoning } => {
                if let Some(text) = message_text(payload).filter(|t| !t.is_empty()) {
                    let candidate = payload.get("id").and_then(Value::as_str);
                    self.push_delta(reasoning, text, candidate, &mut out);
                } else if is_untyped_record(payload) {
                    // Only the SSE event name made this a message.
                    self.warn_unknown(event_name.unwrap_or("unknown").to_string());
                }
            }
            EventKind::PluginCall => {
                let meta = extract_tool_meta(payload, event_name, "plugin_call");
                let input = normalize_tool_input(meta.input.as_ref());
                self.ensure_tool_call(&meta, input, &mut out);
            }
            EventKind::PluginCallOutput => {
                let meta = extract_tool_meta(payload, event_name, "plugin_call_output");
                self.ensure_tool_call(&meta, String::new(), &mut out);
                out.push(ChatStreamPart::ToolResult {
                    tool_call_id: meta.tool_call_id,
                    tool_name: meta.tool_name,
                    result: meta.result.unwrap_or_else(|| parsed.clone()),
                    provider_executed: true,
                });
            }
            EventKind::Content { reasoning } => {
                if let Some(text) = payload
                    .get("text")
                    .and_then(Value::as_str)
                    .filter(|t| !t.is_empty())
                {
                    let candidate = payload.get("msg_id").and_then(Value::as_str);
                    self.push_delta(reasoning, text.to_string(), candidate, &mut out);
                }
            }
            EventKind::Unknown(kind) => self.warn_unknown(kind),
        }
        out
    }

    fn on_response(&mut self, payload: &Map<String, Value>, out: &mut Vec<ChatStreamPart>) {
        if self.state.response_id.is_none()
            && let Some(id) = payload.get("id").and_then(Value::as_str)
        {
            tracing::debug!(response_id = id, model = %self.model_id, "AgentScope response started");
            self.state.response_id = Some(id.to_string());
            out.push(ChatStreamPart::ResponseMetadata {
                id: Some(id.to_string()),
                model_id: Some(self.model_id.clone()),
            });
        }
        if let Some(usage) = normalize_usage(payload.get("usage")) {
            self.state.usage = usage;
        }
    }

    fn push_delta(
        &mut self,
        reasoning: bool,
        delta: String,
        candidate: Option<&str>,
        out: &mut Vec<ChatStreamPart>,
    ) {
        let (slot, started, placeholder) = if reasoning {
            (
                &mut self.state.reasoning_id,
                &mut self.state.started_reasoning,
                REASONING_PLACEHOLDER_ID,
            )
        } else {
            (
                &mut self.state.text_id,
                &mut self.state.started_text,
                TEXT_PLACEHOLDER_ID,
            )
        };
        let id = slot
            .get_or_insert_with(|| {
                candidate
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .unwrap_or(placeholder)
                    .to_string()
            })
            .clone();

        let first = started.insert(&id);
        if reasoning {
            if first {
                out.push(ChatStreamPart::ReasoningStart { id: id.clone() });
            }
            out.push(ChatStreamPart::ReasoningDelta { id, delta });
        } else {
            if first {
                out.push(ChatStreamPart::TextStart { id: id.clone() });
            }
            out.push(ChatStreamPart::TextDelta { id, delta });
        }
    }

    /// Emit a tool-call for this id unless one was already emitted.
    fn ensure_tool_call(&mut self, meta: &ToolMeta, input: String, out: &mut Vec<ChatStreamPart>) {
        if !self.state.started_tool_calls.insert(meta.tool_call_id.clone()) {
            return;
        }
        out.push(ChatStreamPart::ToolCall {
            tool_call_id: meta.tool_call_id.clone(),
            tool_name: meta.tool_name.clone(),
            input,
            provider_executed: true,
        });
    }

    fn record_failure(&mut self, message: String) -> Vec<ChatStreamPart> {
        tracing::warn!(error = %message, "skipping malformed AgentScope SSE record");
        self.state.finish_reason = FinishReason::Error;
        vec![ChatStreamPart::error_message(message)]
    }

    fn warn_unknown(&mut self, kind: String) {
        if !self.warn_unknown_events {
            return;
        }
        if self.state.warned_kinds.insert(kind.clone()) {
            tracing::warn!(kind = %kind, "unhandled AgentScope SSE event kind");
        }
    }
}

/// No `type` or `object` to go on and no `content` array to read.
fn is_untyped_record(payload: &Map<String, Value>) -> bool {
    non_empty_str(payload, "type").is_none()
        && non_empty_str(payload, "object").is_none()
        && !payload.get("content").is_some_and(Value::is_array)
}

impl SseEventConverter for AgentScopeEventConverter {
    fn stream_start(&mut self) -> Vec<ChatStreamPart> {
        vec![ChatStreamPart::StreamStart {
            warnings: self.warnings.clone(),
        }]
    }

    fn convert_event(&mut self, event: Event) -> Vec<ChatStreamPart> {
        let event_name = Some(event.event.as_str()).filter(|n| !n.is_empty());
        self.convert_record(event_name, &event.data)
    }

    fn handle_stream_end(&mut self) -> Vec<ChatStreamPart> {
        let mut out: Vec<ChatStreamPart> = self
            .state
            .started_reasoning
            .drain()
            .map(|id| ChatStreamPart::ReasoningEnd { id })
            .collect();
        out.extend(
            self.state
                .started_text
                .drain()
                .map(|id| ChatStreamPart::TextEnd { id }),
        );
        out.push(ChatStreamPart::Finish {
            finish_reason: self.state.finish_reason,
            usage: self.state.usage,
        });
        out
    }
}

fn extract_tool_meta(payload: &Map<String, Value>, event_name: Option<&str>, default_name: &str) -> ToolMeta {
    let nested: Vec<&Map<String, Value>> = payload
        .get("content")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("data").and_then(Value::as_object))
        .collect();
    let nested_str = |keys: &[&str]| {
        nested
            .iter()
            .find_map(|data| keys.iter().find_map(|k| non_empty_str(data, k)))
    };
    let nested_value = |keys: &[&str]| {
        nested
            .iter()
            .find_map(|data| keys.iter().find_map(|k| present(data, k)))
            .cloned()
    };

    let tool_name = non_empty_str(payload, "name")
        .or_else(|| non_empty_str(payload, "tool_name"))
        .or_else(|| nested_str(&["name", "tool_name"]))
        .or(event_name)
        .unwrap_or(default_name)
        .to_string();
    let tool_call_id = non_empty_str(payload, "msg_id")
        .or_else(|| non_empty_str(payload, "call_id"))
        .or_else(|| nested_str(&["call_id", "id"]))
        .or_else(|| non_empty_str(payload, "id"))
        .map(str::to_string)
        .unwrap_or_else(|| tool_name.clone());

    let input = ["arguments", "params", "input", "data"]
        .iter()
        .find_map(|k| present(payload, k))
        .cloned()
        .or_else(|| nested_value(&["input", "arguments", "params"]));
    let result = ["output", "result", "data"]
        .iter()
        .find_map(|k| present(payload, k))
        .cloned()
        .or_else(|| nested_value(&["output", "result"]));

    ToolMeta {
        tool_name,
        tool_call_id,
        input,
        result,
    }
}

/// A field that exists and is not null.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// Tool input as a string: strings pass through, other JSON is serialized.
fn normalize_tool_input(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
