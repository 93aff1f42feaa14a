pub mod envelope;
pub mod error;
pub mod health;
pub mod junctions;
pub mod location;
pub mod parking;
pub mod signals;
pub mod suggestions;

pub use error::ErrorResponse;

use axum::Router;

use crate::sim::SharedRng;

pub fn router(rng: SharedRng) -> Router {
    Router::new()
        .nest("/street-parking", parking::router(rng.clone()))
        .nest("/traffic-junctions", junctions::router(rng.clone()))
        .nest("/ai-suggestions", suggestions::router())
        .nest("/ai-traffic-signals", signals::router(rng))
}
