pub mod junctions;
pub mod parking;
pub mod signals;
pub mod suggestions;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point on the map. Accepted from callers as-is; geographic validity is
/// not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Reference point used when the caller supplies no location (Bhubaneswar).
pub const DEFAULT_COORDINATE: Coordinate = Coordinate {
    lat: 20.2961,
    lng: 85.8245,
};

/// Process-wide random source shared by all request handlers.
///
/// Draws from concurrent requests may interleave; no ordering or
/// reproducibility is promised across requests. Tests substitute a seeded
/// generator to get deterministic batches.
pub type SharedRng = Arc<Mutex<StdRng>>;

/// Lock the shared generator, recovering the inner value if a previous
/// holder panicked.
pub fn lock_rng(rng: &SharedRng) -> MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Round to 2 decimal places (prices).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (distances, percentages).
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_helpers_truncate_to_expected_precision() {
        assert!((round2(33.33333) - 33.33).abs() < 1e-9);
        assert!((round2(49.999) - 50.0).abs() < 1e-9);
        assert!((round1(123.456) - 123.5).abs() < 1e-9);
        assert!((round1(75.04) - 75.0).abs() < 1e-9);
    }
}
