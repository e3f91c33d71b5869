//! Error types for the Rebrickable client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every error raised after a request was planned carries the name of the
//! operation (`get_color`, `list_set_parts`, ...) and, when a response was
//! received, its status and raw body.

use serde_json::Value;
use thiserror::Error;

/// The main error type for the Rebrickable client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Caller Errors (raised before any network I/O)
    // ============================================================================
    #[error("{operation}: invalid parameter '{parameter}': {message}")]
    Validation {
        operation: String,
        parameter: String,
        message: String,
    },

    #[error("{operation}: failed to encode request: {message}")]
    Encode { operation: String, message: String },

    // ============================================================================
    // HTTP Status Errors
    // ============================================================================
    #[error("{operation}: authentication failed{}: {body}", fmt_status(.status))]
    Auth {
        operation: String,
        status: Option<u16>,
        body: String,
    },

    #[error("{operation}: not found: {body}")]
    NotFound { operation: String, body: String },

    #[error("{operation}: rate limited{}", fmt_retry_after(.retry_after_seconds))]
    RateLimited {
        operation: String,
        retry_after_seconds: Option<u64>,
        body: String,
    },

    #[error("{operation}: server error (HTTP {status}): {body}")]
    Server {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("{operation}: HTTP {status}: {body}")]
    HttpStatus {
        operation: String,
        status: u16,
        body: String,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("{operation}: HTTP request failed: {source}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: request timeout after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("{operation}: failed to decode {entity}: {message}")]
    Decode {
        operation: String,
        entity: String,
        message: String,
        body: String,
    },

    #[error("{operation}: pagination error: {message}")]
    Pagination { operation: String, message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

fn fmt_retry_after(seconds: &Option<u64>) -> String {
    seconds
        .map(|s| format!(", retry after {s}s"))
        .unwrap_or_default()
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a validation error for a caller-supplied parameter
    pub fn validation(
        operation: impl Into<String>,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            operation: operation.into(),
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encode {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(
        operation: impl Into<String>,
        entity: impl Into<String>,
        message: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::Decode {
            operation: operation.into(),
            entity: entity.into(),
            message: message.into(),
            body: body.into(),
        }
    }

    /// Create a pagination error
    pub fn pagination(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pagination {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP status into the matching variant
    pub fn from_status(
        operation: impl Into<String>,
        status: u16,
        body: impl Into<String>,
        retry_after_seconds: Option<u64>,
    ) -> Self {
        let operation = operation.into();
        let body = body.into();
        match status {
            401 | 403 => Self::Auth {
                operation,
                status: Some(status),
                body,
            },
            404 => Self::NotFound { operation, body },
            429 => Self::RateLimited {
                operation,
                retry_after_seconds,
                body,
            },
            500..=599 => Self::Server {
                operation,
                status,
                body,
            },
            _ => Self::HttpStatus {
                operation,
                status,
                body,
            },
        }
    }

    /// Operation that produced this error, if it was tied to one
    pub fn operation(&self) -> Option<&str> {
        match self {
            Error::Validation { operation, .. }
            | Error::Encode { operation, .. }
            | Error::Auth { operation, .. }
            | Error::NotFound { operation, .. }
            | Error::RateLimited { operation, .. }
            | Error::Server { operation, .. }
            | Error::HttpStatus { operation, .. }
            | Error::Transport { operation, .. }
            | Error::Timeout { operation, .. }
            | Error::Decode { operation, .. }
            | Error::Pagination { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } => *status,
            Error::NotFound { .. } => Some(404),
            Error::RateLimited { .. } => Some(429),
            Error::Server { status, .. } | Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body, verbatim
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Auth { body, .. }
            | Error::NotFound { body, .. }
            | Error::RateLimited { body, .. }
            | Error::Server { body, .. }
            | Error::HttpStatus { body, .. }
            | Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Human-readable `detail` message of a JSON error body
    pub fn detail(&self) -> Option<String> {
        let body = self.body()?;
        let value: Value = serde_json::from_str(body).ok()?;
        value.get("detail")?.as_str().map(str::to_string)
    }

    /// Server-provided `Retry-After` hint in seconds
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimited {
                retry_after_seconds,
                ..
            } => *retry_after_seconds,
            _ => None,
        }
    }

    /// Check if this error is retryable
    ///
    /// The client never retries on its own; this is for callers that layer
    /// their own policy on top.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport { source, .. } => source.is_connect() || source.is_timeout(),
            Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::Server { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if this error means the credentials were rejected
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth { .. })
    }

    /// Check if this error means the resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Re-classify a rejected credential exchange as an auth failure
    ///
    /// The token endpoint answers bad credentials with 400, which would
    /// otherwise surface as a plain `HttpStatus`.
    pub(crate) fn into_auth_failure(self) -> Self {
        match self {
            Error::HttpStatus {
                operation,
                status: 400,
                body,
            } => Error::Auth {
                operation,
                status: Some(400),
                body,
            },
            other => other,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the Rebrickable client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
