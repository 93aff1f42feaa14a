use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::{round1, Coordinate};

/// Angular step between signals along the latitude axis (~165m).
const LAT_STEP: f64 = 0.0015;

/// Green time a signal never drops below, in seconds.
const MIN_TIMING_SECS: i32 = 30;

/// Current light shown by a signal. Serializes as the capitalized variant
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum SignalPhase {
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AiTrafficSignal {
    /// Signal identifier, `signal_1` through `signal_3`
    pub id: String,
    /// Display name of the signal
    pub name: String,
    /// Latitude of the signal
    pub lat: f64,
    /// Longitude of the signal
    pub lng: f64,
    /// Phase currently shown
    pub current_phase: SignalPhase,
    /// Optimized cycle timing in seconds, never below 30
    pub timing: u32,
    /// Always true; the fleet runs under AI control
    pub ai_optimized: bool,
    /// Claimed optimization efficiency in percent, rounded to 1 decimal
    pub efficiency: f64,
}

/// Fabricate a batch of 3 signals spaced along the latitude axis through
/// `location`.
///
/// Timing starts from a 60 second base cycle and applies a random adjustment
/// in [-15, 20], floored at `MIN_TIMING_SECS`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, location: Coordinate) -> Vec<AiTrafficSignal> {
    (0..3)
        .map(|i| {
            let offset_lat = f64::from(i - 1) * LAT_STEP;

            let current_phase = match rng.gen_range(0..3) {
                0 => SignalPhase::Red,
                1 => SignalPhase::Yellow,
                _ => SignalPhase::Green,
            };

            let adjustment: i32 = rng.gen_range(-15..=20);
            let timing = (60 + adjustment).max(MIN_TIMING_SECS) as u32;

            AiTrafficSignal {
                id: format!("signal_{}", i + 1),
                name: format!("AI Traffic Signal {}", i + 1),
                lat: location.lat + offset_lat,
                lng: location.lng,
                current_phase,
                timing,
                ai_optimized: true,
                efficiency: round1(rng.gen_range(75.0..=95.0)),
            }
        })
        .collect()
}
