//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because they are the
//! only failure statuses the server produces on purpose; callers routinely
//! branch on them. Any other non-2xx status lands in `HttpError` with the
//! raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 — the request body was missing or malformed.
    #[error("bad request")]
    BadRequest,

    /// The server returned an unexpected non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
