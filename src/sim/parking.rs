use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::{round1, round2, Coordinate};

/// Angular step between neighboring spots in the grid (~110m).
const GRID_STEP: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ParkingSpot {
    /// Spot identifier, `street_1` through `street_8` in grid order
    pub id: String,
    /// Display name of the spot
    pub name: String,
    /// Latitude of the spot
    pub lat: f64,
    /// Longitude of the spot
    pub lng: f64,
    /// Whether the spot is currently free
    pub available: bool,
    /// Hourly rate, rounded to 2 decimals
    pub price_per_hour: f64,
    /// Walking distance from the requested location in meters, rounded to 1 decimal
    pub distance: f64,
    /// Always "Street Parking"
    #[serde(rename = "type")]
    pub spot_type: String,
}

/// Fabricate a batch of 8 street parking spots laid out on a 4x2 grid
/// centered on `location`.
///
/// The spot positions are a deterministic function of the index; only
/// availability, price and distance are drawn from `rng`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, location: Coordinate) -> Vec<ParkingSpot> {
    (0..8)
        .map(|i| {
            let offset_lat = (f64::from(i % 4) - 1.5) * GRID_STEP;
            let offset_lng = (f64::from(i / 4) - 0.5) * GRID_STEP;

            ParkingSpot {
                id: format!("street_{}", i + 1),
                name: format!("Street Parking Spot {}", i + 1),
                lat: location.lat + offset_lat,
                lng: location.lng + offset_lng,
                available: rng.gen_bool(0.7),
                price_per_hour: round2(rng.gen_range(20.0..=50.0)),
                distance: round1(rng.gen_range(50.0..=300.0)),
                spot_type: "Street Parking".to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BASE: Coordinate = Coordinate { lat: 10.0, lng: 20.0 };

    #[test]
    fn generates_eight_spots_on_a_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let spots = generate(&mut rng, BASE);

        assert_eq!(spots.len(), 8);
        for (i, spot) in spots.iter().enumerate() {
            assert_eq!(spot.id, format!("street_{}", i + 1));
            assert_eq!(spot.name, format!("Street Parking Spot {}", i + 1));
            assert_eq!(spot.spot_type, "Street Parking");

            let i = i as i32;
            let expected_lat = BASE.lat + (f64::from(i % 4) - 1.5) * 0.001;
            let expected_lng = BASE.lng + (f64::from(i / 4) - 0.5) * 0.001;
            assert!((spot.lat - expected_lat).abs() < 1e-9);
            assert!((spot.lng - expected_lng).abs() < 1e-9);
        }

        // First spot sits at the grid corner below and left of the base point.
        assert!((spots[0].lat - (BASE.lat - 0.0015)).abs() < 1e-9);
        assert!((spots[0].lng - (BASE.lng - 0.0005)).abs() < 1e-9);
        // Second row of the grid shifts longitude, not latitude.
        assert!((spots[4].lat - spots[0].lat).abs() < 1e-9);
        assert!((spots[4].lng - (BASE.lng + 0.0005)).abs() < 1e-9);
    }

    #[test]
    fn prices_and_distances_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            for spot in generate(&mut rng, BASE) {
                assert!((20.0..=50.0).contains(&spot.price_per_hour));
                assert!((50.0..=300.0).contains(&spot.distance));
                // Rounded to 2 and 1 decimals respectively.
                let cents = spot.price_per_hour * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6);
                let tenths = spot.distance * 10.0;
                assert!((tenths - tenths.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn same_seed_produces_the_same_batch() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        assert_eq!(generate(&mut a, BASE), generate(&mut b, BASE));
    }
}
