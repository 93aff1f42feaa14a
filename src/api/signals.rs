use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::sim::{self, signals::AiTrafficSignal, SharedRng};

use super::envelope::Envelope;
use super::error::ErrorResponse;
use super::location::Location;

#[derive(Clone)]
pub struct SignalsState {
    pub rng: SharedRng,
}

/// Simulated AI-optimized traffic signals around the requested location
#[utoipa::path(
    get,
    path = "/api/ai-traffic-signals",
    params(
        ("lat" = Option<f64>, Query, description = "Latitude to center on (defaults to 20.2961)"),
        ("lng" = Option<f64>, Query, description = "Longitude to center on (defaults to 85.8245)")
    ),
    responses(
        (status = 200, description = "Three AI-controlled signals near the location", body = Envelope<Vec<AiTrafficSignal>>),
        (status = 400, description = "Malformed lat/lng query parameter", body = ErrorResponse)
    ),
    tag = "signals"
)]
pub async fn get_ai_traffic_signals(
    State(state): State<SignalsState>,
    Location(location): Location,
) -> Json<Envelope<Vec<AiTrafficSignal>>> {
    let signals = {
        let mut rng = sim::lock_rng(&state.rng);
        sim::signals::generate(&mut *rng, location)
    };
    Json(Envelope::now(signals, location))
}

pub fn router(rng: SharedRng) -> Router {
    Router::new()
        .route("/", get(get_ai_traffic_signals))
        .with_state(SignalsState { rng })
}
