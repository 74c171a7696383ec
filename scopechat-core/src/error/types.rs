//! Core error types.

use std::collections::HashMap;

use thiserror::Error;

/// Structured description of a failed HTTP call.
///
/// Built from a non-2xx response. It keeps everything needed for diagnostics:
/// the request body that was sent, the raw response body, and the response
/// headers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiCallError {
    /// Human-readable message (the vendor's own message when one was found).
    pub message: String,
    /// Request URL.
    pub url: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Raw response body, if it could be read.
    pub response_body: Option<String>,
    /// Response headers (lowercased names).
    pub response_headers: HashMap<String, String>,
    /// The JSON payload that was sent.
    pub request_body: serde_json::Value,
    /// Whether retrying the same request may succeed.
    pub is_retryable: bool,
}

/// Coarse classification used for presentation and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Client,
    Server,
    Network,
    Parsing,
    Provider,
    Cancelled,
}

#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// A caller-supplied argument failed validation.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// A message part kind the provider cannot accept.
    #[error("Unsupported content: {0}")]
    UnsupportedContent(String),

    /// A message role the provider cannot accept.
    #[error("Unsupported message role: {0}")]
    UnsupportedRole(String),

    /// Non-2xx HTTP response.
    #[error("API call failed: {0}")]
    ApiCall(Box<ApiCallError>),

    /// The response could not be interpreted (bad JSON, wrong shape, missing body).
    #[error("Invalid response data: {message}")]
    InvalidResponseData {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// The vendor reported an error inside an otherwise successful response.
    #[error("{provider} error: {message}")]
    ProviderError {
        provider: String,
        message: String,
        error_code: Option<String>,
    },

    /// The response contained nothing usable.
    #[error("No content generated: {0}")]
    NoContentGenerated(String),

    #[error("No such {model_type}: {model_id}")]
    NoSuchModel { model_id: String, model_type: String },

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Stream error: {0}")]
    StreamError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Request cancelled: {0}")]
    Cancelled(String),
}

impl LlmError {
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self::InvalidResponseData {
            message: message.into(),
            data,
        }
    }

    pub fn api_call(error: ApiCallError) -> Self {
        Self::ApiCall(Box::new(error))
    }

    /// HTTP status code, when the error came from an HTTP response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiCall(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Whether the caller may retry. Only server-side (5xx) API failures qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiCall(e) => e.is_retryable,
            _ => false,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. }
            | Self::UnsupportedContent(_)
            | Self::UnsupportedRole(_)
            | Self::ConfigurationError(_)
            | Self::NoSuchModel { .. } => ErrorCategory::Validation,
            Self::ApiCall(e) if e.status_code >= 500 => ErrorCategory::Server,
            Self::ApiCall(_) => ErrorCategory::Client,
            Self::HttpError(_) | Self::StreamError(_) => ErrorCategory::Network,
            Self::InvalidResponseData { .. } | Self::JsonError(_) => ErrorCategory::Parsing,
            Self::ProviderError { .. } | Self::NoContentGenerated(_) => ErrorCategory::Provider,
            Self::Cancelled(_) => ErrorCategory::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> LlmError {
        LlmError::api_call(ApiCallError {
            message: "boom".into(),
            url: "http://localhost/process".into(),
            status_code: status,
            response_body: None,
            response_headers: HashMap::new(),
            request_body: serde_json::json!({}),
            is_retryable: status >= 500,
        })
    }

    #[test]
    fn api_call_exposes_status_and_retryability() {
        let err = api_error(503);
        assert_eq!(err.status_code(), Some(503));
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Server);

        let err = api_error(400);
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Client);
    }

    #[test]
    fn validation_errors_are_never_retryable() {
        let err = LlmError::invalid_argument("userId", "missing");
        assert!(!err.is_retryable());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn malformed_payloads_and_cancellation_have_own_categories() {
        assert_eq!(
            LlmError::invalid_response("no output", None).category(),
            ErrorCategory::Parsing
        );
        assert_eq!(LlmError::JsonError("eof".into()).category(), ErrorCategory::Parsing);
        assert_eq!(LlmError::StreamError("reset".into()).category(), ErrorCategory::Network);
        assert_eq!(LlmError::Cancelled("stop".into()).category(), ErrorCategory::Cancelled);
    }

    #[test]
    fn api_call_display_uses_vendor_message() {
        assert_eq!(api_error(500).to_string(), "API call failed: boom");
    }
}
