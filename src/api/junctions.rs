use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::sim::{self, junctions::TrafficJunction, SharedRng};

use super::envelope::Envelope;
use super::error::ErrorResponse;
use super::location::Location;

#[derive(Clone)]
pub struct JunctionsState {
    pub rng: SharedRng,
}

/// Simulated traffic junctions around the requested location
#[utoipa::path(
    get,
    path = "/api/traffic-junctions",
    params(
        ("lat" = Option<f64>, Query, description = "Latitude to center on (defaults to 20.2961)"),
        ("lng" = Option<f64>, Query, description = "Longitude to center on (defaults to 85.8245)")
    ),
    responses(
        (status = 200, description = "Five traffic junctions near the location", body = Envelope<Vec<TrafficJunction>>),
        (status = 400, description = "Malformed lat/lng query parameter", body = ErrorResponse)
    ),
    tag = "junctions"
)]
pub async fn get_traffic_junctions(
    State(state): State<JunctionsState>,
    Location(location): Location,
) -> Json<Envelope<Vec<TrafficJunction>>> {
    let junctions = {
        let mut rng = sim::lock_rng(&state.rng);
        sim::junctions::generate(&mut *rng, location)
    };
    Json(Envelope::now(junctions, location))
}

pub fn router(rng: SharedRng) -> Router {
    Router::new()
        .route("/", get(get_traffic_junctions))
        .with_state(JunctionsState { rng })
}
