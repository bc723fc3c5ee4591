//! Synchronous request executor backed by ureq.
//!
//! # Design
//! One blocking GET per call, no retries, no caching, no timeout knobs.
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as plain `HttpResponse` data — interpreting the
//! status is the caller's job, not the transport's. Only failures that
//! prevent a response from existing at all (DNS, unreachable host,
//! connection loss) map to `ApiError::Transport`.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Execute a single GET request and return the response as data.
///
/// Query parameters from the request are URL-encoded by ureq. Never fails
/// on a non-2xx status; fails with `ApiError::Transport` when no response
/// could be obtained.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.get(&request.url);
    for (key, value) in &request.query {
        builder = builder.query(key, value);
    }

    let mut response = builder
        .call()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
