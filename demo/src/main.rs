//! Command-line walkthrough of the Open Notify API.
//!
//! For each endpoint: send one GET, show the status and headers, parse the
//! body, print the fields. Any transport or parse failure propagates to
//! `main` and terminates the run.

use open_notify_core::{transport, JsonAccess, NotifyClient};

const BASE_URL: &str = "http://api.open-notify.org";

// Observer coordinates for the pass predictions: New York City.
const LAT: f64 = 40.71;
const LON: f64 = -74.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = NotifyClient::new(BASE_URL);

    // Everyone currently in space, with status and headers shown first.
    let req = client.build_astronauts();
    let resp = transport::execute(&req)?;
    println!("GET {} -> {}", req.url, resp.status);
    if let Some(content_type) = resp.header("content-type") {
        println!("content-type: {content_type}");
    }
    let astros = client.parse_astronauts(resp)?;
    println!("{} people in space:", astros.number);
    for person in &astros.people {
        println!("  {} ({})", person.name, person.craft);
    }

    // Current ISS position.
    let req = client.build_iss_now(LAT, LON);
    let resp = transport::execute(&req)?;
    println!("\nGET {} -> {}", req.url, resp.status);
    let now = client.parse_iss_now(resp)?;
    println!(
        "ISS at latitude {}, longitude {} (unix time {})",
        now.iss_position.latitude, now.iss_position.longitude, now.timestamp
    );

    // Upcoming passes over the observer.
    let req = client.build_iss_pass(LAT, LON);
    let resp = transport::execute(&req)?;
    println!("\nGET {} -> {}", req.url, resp.status);
    let prediction = client.parse_iss_pass(resp)?;
    println!("next {} passes over ({LAT}, {LON}):", prediction.request.passes);
    for pass in &prediction.response {
        println!("  rises at {} for {} seconds", pass.risetime, pass.duration);
    }

    // The same astronauts body walked as a raw JSON value.
    let req = client.build_astronauts();
    let value = transport::execute(&req)?.json()?;
    let first = value
        .field("people")?
        .item(0)?
        .field("name")?
        .to_str()?;
    println!(
        "\nraw value access: message={:?}, people[0].name={first:?}",
        value.field("message")?.to_str()?
    );

    Ok(())
}
