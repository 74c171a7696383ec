//! AgentScope HTTP error building.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{ApiCallError, LlmError};
use crate::utils::headers::header_map_to_hash_map;

/// Build the error for a non-2xx response.
///
/// The body is read best-effort; a vendor message at `error.message` replaces
/// the generic one when present.
pub async fn build_api_call_error(
    response: reqwest::Response,
    url: &str,
    request_body: &Value,
) -> LlmError {
    let status = response.status().as_u16();
    let headers = header_map_to_hash_map(response.headers());
    let body = response.text().await.ok();
    api_call_error(status, headers, body, url, request_body)
}

/// Assemble an `ApiCall` error from already-read response parts.
pub fn api_call_error(
    status: u16,
    response_headers: HashMap<String, String>,
    response_body: Option<String>,
    url: &str,
    request_body: &Value,
) -> LlmError {
    let message = response_body
        .as_deref()
        .and_then(extract_error_message)
        .unwrap_or_else(|| format!("AgentScope request failed with HTTP {status}"));

    LlmError::api_call(ApiCallError {
        message,
        url: url.to_string(),
        status_code: status,
        response_body,
        response_headers,
        request_body: request_body.clone(),
        is_retryable: status >= 500,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let message = json.get("error")?.get("message")?.as_str()?;
    (!message.is_empty()).then(|| message.to_string())
}

/// Require a JSON object, describing `context` in the error otherwise.
pub fn assert_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>, LlmError> {
    value.as_object().ok_or_else(|| {
        LlmError::invalid_response(format!("{context} is not a JSON object"), Some(value.clone()))
    })
}
