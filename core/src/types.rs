//! DTOs for the Open Notify endpoint payloads.
//!
//! # Design
//! These types mirror the wire schemas but are defined independently of the
//! mock-server crate; integration tests catch any drift between the two.
//! Field types follow what the API actually sends: `iss-now.json` reports
//! latitude/longitude as strings, while the `iss-pass.json` request echo
//! reports them as floats.

use serde::{Deserialize, Serialize};

/// The ISS ground position as reported by `iss-now.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}

/// Response payload of `GET /iss-now.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssNow {
    pub message: String,
    pub timestamp: i64,
    pub iss_position: IssPosition,
}

/// One predicted overhead pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pass {
    /// Seconds the ISS stays above the horizon.
    pub duration: i64,
    /// Unix timestamp of the rise.
    pub risetime: i64,
}

/// Echo of the query the server answered, part of `iss-pass.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassRequest {
    pub altitude: f64,
    pub datetime: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub passes: u32,
}

/// Response payload of `GET /iss-pass.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassPrediction {
    pub message: String,
    pub request: PassRequest,
    pub response: Vec<Pass>,
}

/// One person currently in space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Astronaut {
    pub craft: String,
    pub name: String,
}

/// Response payload of `GET /astros.json`. The server keeps `number`
/// equal to `people.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Astronauts {
    pub message: String,
    pub number: u32,
    pub people: Vec<Astronaut>,
}
