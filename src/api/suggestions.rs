use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, Timelike};

use crate::sim::suggestions::{self, AiSuggestion};

use super::envelope::Envelope;
use super::error::ErrorResponse;
use super::location::Location;

/// Standing AI advisories for the requested location
///
/// Content is fixed; only the first advisory's priority shifts with the
/// local rush windows. The location is echoed back without influencing the
/// advisories.
#[utoipa::path(
    get,
    path = "/api/ai-suggestions",
    params(
        ("lat" = Option<f64>, Query, description = "Latitude to center on (defaults to 20.2961)"),
        ("lng" = Option<f64>, Query, description = "Longitude to center on (defaults to 85.8245)")
    ),
    responses(
        (status = 200, description = "Three driving and parking advisories", body = Envelope<Vec<AiSuggestion>>),
        (status = 400, description = "Malformed lat/lng query parameter", body = ErrorResponse)
    ),
    tag = "suggestions"
)]
pub async fn get_ai_suggestions(
    Location(location): Location,
) -> Json<Envelope<Vec<AiSuggestion>>> {
    let items = suggestions::generate(Local::now().hour());
    Json(Envelope::now(items, location))
}

pub fn router() -> Router {
    Router::new().route("/", get(get_ai_suggestions))
}
