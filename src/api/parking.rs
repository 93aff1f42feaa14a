use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::sim::{self, parking::ParkingSpot, SharedRng};

use super::envelope::Envelope;
use super::error::ErrorResponse;
use super::location::Location;

#[derive(Clone)]
pub struct ParkingState {
    pub rng: SharedRng,
}

/// Simulated street parking around the requested location
#[utoipa::path(
    get,
    path = "/api/street-parking",
    params(
        ("lat" = Option<f64>, Query, description = "Latitude to center on (defaults to 20.2961)"),
        ("lng" = Option<f64>, Query, description = "Longitude to center on (defaults to 85.8245)")
    ),
    responses(
        (status = 200, description = "Eight street parking spots near the location", body = Envelope<Vec<ParkingSpot>>),
        (status = 400, description = "Malformed lat/lng query parameter", body = ErrorResponse)
    ),
    tag = "parking"
)]
pub async fn get_street_parking(
    State(state): State<ParkingState>,
    Location(location): Location,
) -> Json<Envelope<Vec<ParkingSpot>>> {
    let spots = {
        let mut rng = sim::lock_rng(&state.rng);
        sim::parking::generate(&mut *rng, location)
    };
    Json(Envelope::now(spots, location))
}

pub fn router(rng: SharedRng) -> Router {
    Router::new()
        .route("/", get(get_street_parking))
        .with_state(ParkingState { rng })
}
