use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid credential header: {0}")]
    InvalidHeader(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Connection-level failure raised by a [`Transport`](crate::transport::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// A single field-level complaint returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub code: String,
    // Any JSON value, not only strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<serde_json::Value>,
    #[serde(default)]
    pub path: Vec<String>,
    pub message: String,
}

/// Error envelope returned by the remote API on non-2xx responses.
///
/// Renders as `"<message>: <json of validationError>"` so a single string
/// keeps the full diagnostic, while [`validation_errors`](Self::validation_errors)
/// stays available for programmatic inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub validation_errors: Vec<ValidationIssue>,
}

impl ApiError {
    pub(crate) fn from_payload(status: StatusCode, payload: ErrorPayload) -> Self {
        Self {
            status,
            message: payload.message,
            validation_errors: payload.validation_error.unwrap_or_default(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issues = serde_json::to_string(&self.validation_errors).map_err(|_| fmt::Error)?;
        write!(f, "{}: {}", self.message, issues)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorPayload {
    message: String,
    validation_error: Option<Vec<ValidationIssue>>,
}

pub type Result<T> = std::result::Result<T, Error>;
