//! Synchronous API client core for the Open Notify ISS service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). Callers either execute the
//! round-trip themselves or hand the request to [`transport::execute`],
//! keeping the parsing core fully deterministic and testable.
//!
//! # Design
//! - `NotifyClient` is stateless — it holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Types use owned `String` / `Vec` fields; all requests are GET.
//! - The `json` module exposes encode/decode plus explicit fallible
//!   accessors over `serde_json::Value`, for callers that want to walk a
//!   body of unknown shape instead of deserializing into a DTO.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod json;
pub mod transport;
pub mod types;

pub use client::NotifyClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use json::JsonAccess;
pub use types::{Astronaut, Astronauts, IssNow, IssPosition, Pass, PassPrediction, PassRequest};
