//! Error types for the Open Notify API client.
//!
//! # Design
//! Transport failures and status interpretation live in separate variants
//! because they happen at different layers: `transport::execute` only ever
//! produces `Transport`, while `Http` comes from the `parse_*` methods when
//! a caller feeds them a non-200 response. `TypeMismatch` is reserved for
//! the `json` accessors, where "key absent" and "wrong kind" are the same
//! failure from the caller's point of view.

use std::fmt;

/// Errors returned by the client, transport, and JSON accessors.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed: DNS failure, unreachable host, or
    /// timeout. The transport does not retry.
    Transport(String),

    /// A `parse_*` method received a non-200 response. The raw status and
    /// body are kept for the caller to inspect.
    Http { status: u16, body: String },

    /// The body was not well-formed JSON, or did not match the expected
    /// schema. No partial value is ever returned.
    Parse(String),

    /// A JSON accessor found the wrong kind of value, a missing key, or an
    /// out-of-range index.
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Parse(msg) => write!(f, "JSON parse failed: {msg}"),
            ApiError::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
