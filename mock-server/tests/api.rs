use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Astronauts, IssNow, PassPrediction};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- iss-now ---

#[tokio::test]
async fn iss_now_returns_success_payload() {
    let app = app();
    let resp = app.oneshot(get("/iss-now.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let now: IssNow = body_json(resp).await;
    assert_eq!(now.message, "success");
    assert!(now.timestamp > 0);
    now.iss_position.latitude.parse::<f64>().unwrap();
    now.iss_position.longitude.parse::<f64>().unwrap();
}

#[tokio::test]
async fn iss_now_ignores_observer_coordinates() {
    let app = app();
    let resp = app
        .oneshot(get("/iss-now.json?lat=40.71&lon=-74.0"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let now: IssNow = body_json(resp).await;
    assert_eq!(now.message, "success");
}

// --- iss-pass ---

#[tokio::test]
async fn iss_pass_returns_predictions() {
    let app = app();
    let resp = app
        .oneshot(get("/iss-pass.json?lat=50.0&lon=-86.5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let prediction: PassPrediction = body_json(resp).await;
    assert_eq!(prediction.message, "success");
    assert_eq!(prediction.request.latitude, 50.0);
    assert_eq!(prediction.request.longitude, -86.5);
    assert_eq!(prediction.response.len(), prediction.request.passes as usize);
    // Risetimes are strictly increasing.
    for pair in prediction.response.windows(2) {
        assert!(pair[0].risetime < pair[1].risetime);
    }
}

#[tokio::test]
async fn iss_pass_missing_coordinates_returns_400() {
    let app = app();
    let resp = app.oneshot(get("/iss-pass.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn iss_pass_non_numeric_coordinates_returns_400() {
    let app = app();
    let resp = app
        .oneshot(get("/iss-pass.json?lat=north&lon=east"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- astros ---

#[tokio::test]
async fn astros_number_matches_people_len() {
    let app = app();
    let resp = app.oneshot(get("/astros.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let astros: Astronauts = body_json(resp).await;
    assert_eq!(astros.message, "success");
    assert_eq!(astros.number as usize, astros.people.len());
}

// --- unknown route ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = app();
    let resp = app.oneshot(get("/iss-velocity.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}
