//! Usage normalization across snake_case, camelCase and OpenAI-style keys.

use serde_json::{Map, Value};

use crate::types::Usage;

const INPUT_KEYS: &[&str] = &["input_tokens", "prompt_tokens", "inputTokens", "promptTokens"];
const OUTPUT_KEYS: &[&str] = &[
    "output_tokens",
    "completion_tokens",
    "outputTokens",
    "completionTokens",
];
const TOTAL_KEYS: &[&str] = &["total_tokens", "totalTokens"];
const REASONING_KEYS: &[&str] = &["reasoning_tokens", "reasoningTokens"];
const CACHED_INPUT_KEYS: &[&str] = &["cached_input_tokens", "cachedInputTokens"];

/// Normalize a vendor usage object. `None` unless `raw` is a JSON object.
///
/// The first key holding a non-negative integer wins; other values are ignored.
pub fn normalize_usage(raw: Option<&Value>) -> Option<Usage> {
    let obj = raw?.as_object()?;
    Some(Usage {
        input_tokens: first_count(obj, INPUT_KEYS),
        output_tokens: first_count(obj, OUTPUT_KEYS),
        total_tokens: first_count(obj, TOTAL_KEYS),
        reasoning_tokens: first_count(obj, REASONING_KEYS),
        cached_input_tokens: first_count(obj, CACHED_INPUT_KEYS),
    })
}

fn first_count(obj: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_snake_case_usage() {
        let usage = normalize_usage(Some(&json!({
            "input_tokens": 3, "output_tokens": 2, "total_tokens": 5
        })))
        .unwrap();
        assert_eq!(usage.input_tokens, Some(3));
        assert_eq!(usage.output_tokens, Some(2));
        assert_eq!(usage.total_tokens, Some(5));
        assert_eq!(usage.reasoning_tokens, None);
    }

    #[test]
    fn accepts_aliases_in_priority_order() {
        let usage = normalize_usage(Some(&json!({
            "prompt_tokens": 7,
            "promptTokens": 9,
            "completionTokens": 4,
            "totalTokens": 11,
            "reasoningTokens": 1,
            "cachedInputTokens": 2
        })))
        .unwrap();
        assert_eq!(usage.input_tokens, Some(7));
        assert_eq!(usage.output_tokens, Some(4));
        assert_eq!(usage.total_tokens, Some(11));
        assert_eq!(usage.reasoning_tokens, Some(1));
        assert_eq!(usage.cached_input_tokens, Some(2));
    }

    #[test]
    fn ignores_non_numeric_values_and_non_objects() {
        let usage = normalize_usage(Some(&json!({"input_tokens": "3", "total_tokens": 5}))).unwrap();
        assert_eq!(usage.input_tokens, None);
        assert_eq!(usage.total_tokens, Some(5));
        assert!(normalize_usage(Some(&json!(42))).is_none());
        assert!(normalize_usage(None).is_none());
    }
}
