//! Error types for the graftf exporter.
//!
//! This module defines `ExportError`, the unified error type used throughout
//! the application for consistent error handling and propagation.
//!
//! # Security
//!
//! All error messages are sanitized to ensure API keys are never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Unified error type for all export operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like API keys.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration error - missing or invalid command-line arguments.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status} from {endpoint}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The endpoint path that produced the status.
        endpoint: String,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} during {operation} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Authentication failed - likely an invalid API key.
    #[error("authentication failed (HTTP {status}) - check the API key")]
    Authentication {
        /// The rejecting status code (401 or 403).
        status: reqwest::StatusCode,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ExportError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ExportError::Validation(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        ExportError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates an I/O error for an output path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API key.
    ///
    /// This is critical for security - API keys must never appear in logs,
    /// error messages, or generated output.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_key` - The API key to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the API key replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_error() {
        let err = ExportError::invalid_config("--url must start with http:// or https://");
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("--url"));
    }

    #[test]
    fn test_timeout_error() {
        let err = ExportError::timeout(Duration::from_secs(300), "GET /api/folders");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("300s"));
        assert!(msg.contains("/api/folders"));
    }

    #[test]
    fn test_http_status_error_names_endpoint() {
        let err = ExportError::HttpStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            endpoint: "/api/search".to_string(),
            body: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/api/search"));
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ExportError::io("dashboards/abc123.json", source);
        assert!(err.to_string().contains("dashboards/abc123.json"));
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = ExportError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = ExportError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitize_message_no_match() {
        let message = "Some error message";
        let sanitized = ExportError::sanitize_message(message, "not_present");
        assert_eq!(sanitized, message);
    }
}
