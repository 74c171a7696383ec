//! HTTP Headers Utility

use std::collections::HashMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::LlmError;

/// HTTP header builder for API requests.
///
/// Later insertions replace earlier ones; header names compare
/// case-insensitively.
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, LlmError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            LlmError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header value for '{name}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, LlmError> {
        for (key, value) in custom_headers {
            self = self.with_header(key, value)?;
        }
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

/// Merge header layers, lowest precedence first.
///
/// `Content-Type: application/json` is set before any layer, so a layer may
/// still override it.
pub fn merge_headers(layers: &[&HashMap<String, String>]) -> Result<HeaderMap, LlmError> {
    let mut builder = HttpHeaderBuilder::new().with_json_content_type();
    for layer in layers {
        builder = builder.with_custom_headers(layer)?;
    }
    Ok(builder.build())
}

/// Flatten a `HeaderMap` into lowercased name/value pairs.
///
/// Non-UTF-8 values are skipped; repeated names keep the last value.
pub fn header_map_to_hash_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn later_layers_win_case_insensitively() {
        let defaults = map(&[("X-Tenant", "default"), ("x-only-default", "1")]);
        let options = map(&[("x-tenant", "options"), ("x-only-options", "2")]);
        let call = map(&[("X-TENANT", "call")]);

        let headers = merge_headers(&[&defaults, &options, &call]).unwrap();
        assert_eq!(headers.get("x-tenant").unwrap(), "call");
        assert_eq!(headers.get("x-only-default").unwrap(), "1");
        assert_eq!(headers.get("x-only-options").unwrap(), "2");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn invalid_header_name_is_configuration_error() {
        let bad = map(&[("bad header", "v")]);
        assert!(matches!(
            merge_headers(&[&bad]),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn header_map_flattens_to_lowercase() {
        let headers = HttpHeaderBuilder::new()
            .with_header("X-Request-Id", "abc")
            .unwrap()
            .build();
        let flat = header_map_to_hash_map(&headers);
        assert_eq!(flat.get("x-request-id").map(String::as_str), Some("abc"));
    }
}
