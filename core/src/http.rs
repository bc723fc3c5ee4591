//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The core crate builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — the caller (or `transport::execute`) performs
//! the actual I/O. The Open Notify API is read-only, so there is no method
//! field: every request is a GET.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the builder, the transport, and test harnesses.

use serde_json::Value;

use crate::error::ApiError;
use crate::json;

/// An HTTP GET request described as plain data.
///
/// Built by `NotifyClient::build_*` methods. Query parameters are kept as
/// unencoded pairs in insertion order; the transport is responsible for
/// URL-encoding them when the request is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `NotifyClient::parse_*` methods for deserialization. A non-2xx status
/// is not an error at this level; it is data for the caller to interpret.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Look up a header value by name, case-insensitively. Returns the
    /// first match when the server sent the header more than once.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `Content-Type` header indicates a JSON body.
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|v| v.to_ascii_lowercase().contains("application/json"))
    }

    /// Decode the body into a `serde_json::Value`.
    ///
    /// Fails with `ApiError::Parse` when the `Content-Type` does not
    /// indicate JSON or the body is not well-formed. The status code is
    /// deliberately not consulted: error pages decode too, and status
    /// interpretation belongs to the caller.
    pub fn json(&self) -> Result<Value, ApiError> {
        if !self.is_json() {
            return Err(ApiError::Parse(format!(
                "content-type is {:?}, not JSON",
                self.header("content-type").unwrap_or("absent")
            )));
        }
        json::decode(&self.body)
    }
}
