//! Stateless request builder and response parser for the Open Notify API.
//!
//! # Design
//! `NotifyClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual round-trip in between
//! (usually via `transport::execute`), keeping this layer deterministic
//! and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Astronauts, IssNow, PassPrediction};

/// Synchronous, stateless client for the Open Notify API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    base_url: String,
}

impl NotifyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /iss-now.json` — the current ISS position. The server accepts
    /// and ignores observer coordinates; they are sent anyway to match the
    /// other endpoints' calling convention.
    pub fn build_iss_now(&self, lat: f64, lon: f64) -> HttpRequest {
        HttpRequest {
            url: format!("{}/iss-now.json", self.base_url),
            query: coordinate_query(lat, lon),
        }
    }

    /// `GET /iss-pass.json?lat=..&lon=..` — upcoming overhead passes for
    /// an observer at the given coordinates.
    pub fn build_iss_pass(&self, lat: f64, lon: f64) -> HttpRequest {
        HttpRequest {
            url: format!("{}/iss-pass.json", self.base_url),
            query: coordinate_query(lat, lon),
        }
    }

    /// `GET /astros.json` — everyone currently in space.
    pub fn build_astronauts(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/astros.json", self.base_url),
            query: Vec::new(),
        }
    }

    pub fn parse_iss_now(&self, response: HttpResponse) -> Result<IssNow, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub fn parse_iss_pass(&self, response: HttpResponse) -> Result<PassPrediction, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub fn parse_astronauts(&self, response: HttpResponse) -> Result<Astronauts, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn coordinate_query(lat: f64, lon: f64) -> Vec<(String, String)> {
    vec![
        ("lat".to_string(), lat.to_string()),
        ("lon".to_string(), lon.to_string()),
    ]
}

/// Reject non-200 responses before attempting to decode a typed payload.
///
/// The transport never errors on status; this is where a caller who went
/// through `parse_*` learns about an error response. Callers who want the
/// raw body of a non-200 can use `HttpResponse::json` directly.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NotifyClient {
        NotifyClient::new("http://localhost:3000")
    }

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn build_iss_now_produces_correct_request() {
        let req = client().build_iss_now(40.71, -74.0);
        assert_eq!(req.url, "http://localhost:3000/iss-now.json");
        assert_eq!(
            req.query,
            vec![
                ("lat".to_string(), "40.71".to_string()),
                ("lon".to_string(), "-74".to_string()),
            ]
        );
    }

    #[test]
    fn build_iss_pass_produces_correct_request() {
        let req = client().build_iss_pass(50.0, -86.5);
        assert_eq!(req.url, "http://localhost:3000/iss-pass.json");
        assert_eq!(
            req.query,
            vec![
                ("lat".to_string(), "50".to_string()),
                ("lon".to_string(), "-86.5".to_string()),
            ]
        );
    }

    #[test]
    fn build_astronauts_produces_correct_request() {
        let req = client().build_astronauts();
        assert_eq!(req.url, "http://localhost:3000/astros.json");
        assert!(req.query.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = NotifyClient::new("http://localhost:3000/");
        let req = client.build_astronauts();
        assert_eq!(req.url, "http://localhost:3000/astros.json");
    }

    #[test]
    fn parse_iss_now_success() {
        let response = ok_response(
            r#"{"message":"success","timestamp":1615357596,"iss_position":{"latitude":"-47.3213","longitude":"151.6266"}}"#,
        );
        let now = client().parse_iss_now(response).unwrap();
        assert_eq!(now.message, "success");
        assert_eq!(now.timestamp, 1615357596);
        assert_eq!(now.iss_position.longitude, "151.6266");
    }

    #[test]
    fn parse_iss_pass_success() {
        let response = ok_response(
            r#"{"message":"success","request":{"altitude":100,"datetime":1615355000,"latitude":40.71,"longitude":-74.0,"passes":2},"response":[{"duration":611,"risetime":1615355909},{"duration":634,"risetime":1615361734}]}"#,
        );
        let prediction = client().parse_iss_pass(response).unwrap();
        assert_eq!(prediction.response.len(), 2);
        assert_eq!(prediction.response[0].duration, 611);
        assert_eq!(prediction.request.passes, 2);
    }

    #[test]
    fn parse_astronauts_success() {
        let response = ok_response(
            r#"{"message":"success","number":2,"people":[{"craft":"ISS","name":"A"},{"craft":"ISS","name":"B"}]}"#,
        );
        let astros = client().parse_astronauts(response).unwrap();
        assert_eq!(astros.number, 2);
        assert_eq!(astros.people.len(), 2);
        assert_eq!(astros.people[1].name, "B");
    }

    #[test]
    fn parse_rejects_non_200_status() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"message":"failure","reason":"Latitude must be specified"}"#.to_string(),
        };
        let err = client().parse_iss_pass(response).unwrap_err();
        match err {
            ApiError::Http { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Latitude"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_bad_json() {
        let response = ok_response("not json");
        let err = client().parse_astronauts(response).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn parse_rejects_schema_mismatch() {
        let response = ok_response(r#"{"message":"success"}"#);
        let err = client().parse_astronauts(response).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
