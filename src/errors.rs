//! Error types shared across the crate.
//!
//! The API client folds every failure into [`ApiError`], so callers match on
//! one enum instead of inspecting strings. Configuration and database setup
//! have their own small enums because they fail before any request is made.

use thiserror::Error;

/// Error code reported for failures that did not come from the backend's own
/// error envelope (transport, HTTP status, decoding).
pub const GENERIC_ERROR_CODE: &str = "GENERAL_001";

/// Message used when a non-success response carries no `message` field.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Message used when a transport error has no description of its own.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("network failure: {message}")]
    Network { message: String },

    /// The backend answered with a status outside the 2xx range.
    #[error("request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// A 2xx response whose body could not be turned into the expected payload.
    #[error("cannot decode response: {message}")]
    Decode { message: String },

    /// A 2xx envelope with `success: false`.
    #[error("{code}: {message}")]
    Application { code: String, message: String },
}

impl ApiError {
    /// The flat error code carried in the wire envelope.
    pub fn code(&self) -> &str {
        match self {
            ApiError::Application { code, .. } => code,
            _ => GENERIC_ERROR_CODE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Network { message }
            | ApiError::HttpStatus { message, .. }
            | ApiError::Decode { message }
            | ApiError::Application { message, .. } => message,
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        ApiError::Network {
            message: if message.is_empty() {
                NETWORK_ERROR_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
