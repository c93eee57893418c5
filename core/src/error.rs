//! Error types for the primer utilities.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the organization does not exist" from "the server returned an unexpected
//! status." All other non-200 responses land in `HttpError` with the raw
//! status code and body for debugging. A key missing from a decoded payload
//! is reported through `MissingKey`, the same error the nested lookup helper
//! returns on its own.

use thiserror::Error;

/// A key path traversal hit a key that is absent, or hit a non-object value
/// before the path was exhausted. Carries the first offending key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing key {key:?}")]
pub struct MissingKey {
    pub key: String,
}

impl MissingKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Errors returned by `get_json` and `GithubOrgClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be decoded as JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A decoded payload lacked a required key.
    #[error(transparent)]
    MissingKey(#[from] MissingKey),
}

/// Errors from the task-based delay helpers.
#[derive(Debug, Error)]
pub enum DelayError {
    /// A spawned delay task panicked or was cancelled.
    #[error("delay task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The runtime backing `measure_time` could not be built.
    #[error("failed to build runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
