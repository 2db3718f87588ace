//! Error types for the students client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. The controller itself treats every
//! variant the same way: log, notify, carry on.

use thiserror::Error;

/// Errors returned by the data-access layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Submission-time form check failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("age is not a whole number: {0:?}")]
    InvalidAge(String),
}
