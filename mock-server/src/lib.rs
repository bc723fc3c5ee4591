//! Local stand-in for the Open Notify API, used by integration tests.
//!
//! Serves the same three endpoints with the same shapes: `iss-now.json`
//! (string coordinates, current timestamp), `iss-pass.json` (requires
//! numeric lat/lon, 400 otherwise), and `astros.json` (roster held in
//! shared state, `number` kept equal to the roster length).

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssNow {
    pub message: String,
    pub timestamp: i64,
    pub iss_position: IssPosition,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pass {
    pub duration: i64,
    pub risetime: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PassRequest {
    pub altitude: f64,
    pub datetime: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub passes: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PassPrediction {
    pub message: String,
    pub request: PassRequest,
    pub response: Vec<Pass>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Astronaut {
    pub craft: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Astronauts {
    pub message: String,
    pub number: u32,
    pub people: Vec<Astronaut>,
}

/// Observer coordinates. `iss-pass.json` rejects requests without them;
/// `iss-now.json` accepts and ignores them, like the real API.
#[derive(Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

pub type Roster = Arc<Vec<Astronaut>>;

pub fn default_roster() -> Roster {
    Arc::new(vec![
        Astronaut {
            craft: "ISS".to_string(),
            name: "Mark Vande Hei".to_string(),
        },
        Astronaut {
            craft: "ISS".to_string(),
            name: "Oleg Novitskiy".to_string(),
        },
        Astronaut {
            craft: "Tiangong".to_string(),
            name: "Nie Haisheng".to_string(),
        },
    ])
}

pub fn app() -> Router {
    app_with_roster(default_roster())
}

pub fn app_with_roster(roster: Roster) -> Router {
    Router::new()
        .route("/iss-now.json", get(iss_now))
        .route("/iss-pass.json", get(iss_pass))
        .route("/astros.json", get(astros))
        .with_state(roster)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

async fn iss_now() -> Json<IssNow> {
    Json(IssNow {
        message: "success".to_string(),
        timestamp: unix_now(),
        iss_position: IssPosition {
            latitude: "-47.3213".to_string(),
            longitude: "151.6266".to_string(),
        },
    })
}

/// Synthetic predictions: five passes starting ten minutes out, ninety
/// minutes apart (one orbit), each visible for about ten minutes.
async fn iss_pass(
    coords: Result<Query<Coordinates>, QueryRejection>,
) -> Result<Json<PassPrediction>, StatusCode> {
    let Query(coords) = coords.map_err(|_| StatusCode::BAD_REQUEST)?;
    let now = unix_now();
    let response = (0..5)
        .map(|i| Pass {
            duration: 611 + i * 23,
            risetime: now + 600 + i * 5400,
        })
        .collect();
    Ok(Json(PassPrediction {
        message: "success".to_string(),
        request: PassRequest {
            altitude: 100.0,
            datetime: now,
            latitude: coords.lat,
            longitude: coords.lon,
            passes: 5,
        },
        response,
    }))
}

async fn astros(State(roster): State<Roster>) -> Json<Astronauts> {
    Json(Astronauts {
        message: "success".to_string(),
        number: roster.len() as u32,
        people: roster.as_ref().clone(),
    })
}
