use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::sim::Coordinate;

/// Wrapper applied to every data endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    /// Always true for successful responses
    pub success: bool,
    /// The generated batch
    pub data: T,
    /// Unix timestamp in fractional seconds at generation time
    pub timestamp: f64,
    /// The location the batch was generated around
    pub location: Coordinate,
}

impl<T> Envelope<T> {
    pub fn new(data: T, location: Coordinate, now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            timestamp: epoch_seconds(now),
            location,
        }
    }

    /// Wrap `data` stamped with the current wall clock.
    pub fn now(data: T, location: Coordinate) -> Self {
        Self::new(data, location, Utc::now())
    }
}

/// Seconds since the Unix epoch with microsecond resolution.
pub(crate) fn epoch_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}
