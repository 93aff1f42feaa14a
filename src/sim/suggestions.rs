use serde::Serialize;
use utoipa::ToSchema;

/// How urgently a suggestion should be surfaced to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum SuggestionPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AiSuggestion {
    /// Category of the advisory
    #[serde(rename = "type")]
    pub suggestion_type: String,
    /// Advisory text shown to the driver
    pub message: String,
    /// Model confidence in the advisory, 0 to 1
    pub confidence: f64,
    /// Surfacing priority
    pub priority: SuggestionPriority,
}

/// Morning and evening rush windows, inclusive local hours.
pub fn is_peak_hour(hour: u32) -> bool {
    (8..=10).contains(&hour) || (17..=19).contains(&hour)
}

/// Produce the three standing advisories. Only the parking-strategy priority
/// depends on the hour; the texts and confidences are fixed.
///
/// The hour is passed in by the caller so the rush-window branch can be
/// exercised at any time of day.
pub fn generate(hour: u32) -> Vec<AiSuggestion> {
    vec![
        AiSuggestion {
            suggestion_type: "Parking Strategy".to_string(),
            message: "Peak hours detected. Consider alternative parking locations.".to_string(),
            confidence: 0.85,
            priority: if is_peak_hour(hour) {
                SuggestionPriority::High
            } else {
                SuggestionPriority::Medium
            },
        },
        AiSuggestion {
            suggestion_type: "Traffic Optimization".to_string(),
            message: "AI suggests taking Route A to avoid congestion.".to_string(),
            confidence: 0.78,
            priority: SuggestionPriority::Medium,
        },
        AiSuggestion {
            suggestion_type: "Cost Optimization".to_string(),
            message: "Street parking is 40% cheaper than nearby garages.".to_string(),
            confidence: 0.92,
            priority: SuggestionPriority::High,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_windows_cover_morning_and_evening_rush() {
        let peak_hours: Vec<u32> = (0..24).filter(|&h| is_peak_hour(h)).collect();
        assert_eq!(peak_hours, vec![8, 9, 10, 17, 18, 19]);
    }

    #[test]
    fn first_priority_follows_the_hour() {
        assert_eq!(generate(9)[0].priority, SuggestionPriority::High);
        assert_eq!(generate(18)[0].priority, SuggestionPriority::High);
        assert_eq!(generate(3)[0].priority, SuggestionPriority::Medium);
        assert_eq!(generate(12)[0].priority, SuggestionPriority::Medium);
    }

    #[test]
    fn content_is_fixed_regardless_of_hour() {
        let suggestions = generate(12);
        assert_eq!(suggestions.len(), 3);

        assert_eq!(suggestions[0].suggestion_type, "Parking Strategy");
        assert_eq!(suggestions[1].suggestion_type, "Traffic Optimization");
        assert_eq!(suggestions[2].suggestion_type, "Cost Optimization");

        assert!((suggestions[0].confidence - 0.85).abs() < 1e-9);
        assert!((suggestions[1].confidence - 0.78).abs() < 1e-9);
        assert!((suggestions[2].confidence - 0.92).abs() < 1e-9);

        // The trailing two priorities never change.
        assert_eq!(suggestions[1].priority, SuggestionPriority::Medium);
        assert_eq!(suggestions[2].priority, SuggestionPriority::High);
    }
}
