use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::Coordinate;

/// Angular step between neighboring junctions (~220m).
const GRID_STEP: f64 = 0.002;

/// Congestion level at a junction. Serializes as the capitalized variant
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrafficJunction {
    /// Junction identifier, `junction_1` through `junction_5`
    pub id: String,
    /// Display name of the junction
    pub name: String,
    /// Latitude of the junction
    pub lat: f64,
    /// Longitude of the junction
    pub lng: f64,
    /// Current congestion level
    pub traffic_level: TrafficLevel,
    /// Signal cycle length in seconds, 30 to 120
    pub signal_timing: u32,
    /// Expected wait at the junction in seconds, 10 to 60
    pub wait_time: u32,
}

/// Fabricate a batch of 5 traffic junctions laid out on a 3x2 grid centered
/// on `location`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, location: Coordinate) -> Vec<TrafficJunction> {
    (0..5)
        .map(|i| {
            let offset_lat = (f64::from(i % 3) - 1.0) * GRID_STEP;
            let offset_lng = (f64::from(i / 3) - 0.5) * GRID_STEP;

            let traffic_level = match rng.gen_range(0..3) {
                0 => TrafficLevel::Low,
                1 => TrafficLevel::Medium,
                _ => TrafficLevel::High,
            };

            TrafficJunction {
                id: format!("junction_{}", i + 1),
                name: format!("Traffic Junction {}", i + 1),
                lat: location.lat + offset_lat,
                lng: location.lng + offset_lng,
                traffic_level,
                signal_timing: rng.gen_range(30..=120),
                wait_time: rng.gen_range(10..=60),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BASE: Coordinate = Coordinate { lat: 20.2961, lng: 85.8245 };

    #[test]
    fn generates_five_junctions_on_a_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let junctions = generate(&mut rng, BASE);

        assert_eq!(junctions.len(), 5);
        for (i, junction) in junctions.iter().enumerate() {
            assert_eq!(junction.id, format!("junction_{}", i + 1));
            assert_eq!(junction.name, format!("Traffic Junction {}", i + 1));

            let i = i as i32;
            let expected_lat = BASE.lat + (f64::from(i % 3) - 1.0) * 0.002;
            let expected_lng = BASE.lng + (f64::from(i / 3) - 0.5) * 0.002;
            assert!((junction.lat - expected_lat).abs() < 1e-9);
            assert!((junction.lng - expected_lng).abs() < 1e-9);
        }
    }

    #[test]
    fn timings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            for junction in generate(&mut rng, BASE) {
                assert!((30..=120).contains(&junction.signal_timing));
                assert!((10..=60).contains(&junction.wait_time));
            }
        }
    }

    #[test]
    fn traffic_levels_serialize_capitalized() {
        assert_eq!(
            serde_json::to_string(&TrafficLevel::Medium).unwrap(),
            "\"Medium\""
        );
    }
}
