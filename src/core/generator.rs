//! Template-based itinerary generation.
//!
//! Both strategies are deterministic. Preference fields are accepted so callers can pass the
//! whole form, but no strategy reads them yet.

use crate::domain::model::{DateRange, DayPlan, Itinerary, Mode, Preferences, TripRequest};
use crate::utils::error::Result;
use crate::utils::validation::parse_date_field;

pub const BASIC_ACTIVITIES: [&str; 4] = [
    "Morning exploration",
    "Lunch break",
    "Afternoon sightseeing",
    "Evening relax",
];

pub fn generate(request: &TripRequest) -> Result<Itinerary> {
    log_unused_preferences(request.mode, &request.preferences);

    let itinerary = match request.mode {
        Mode::Basic => {
            let start = parse_date_field("start", request.start.as_deref())?;
            let end = parse_date_field("end", request.end.as_deref())?;
            generate_basic(DateRange::new(start, end))
        }
        Mode::Advanced => generate_advanced(),
    };

    tracing::debug!(
        "Generated {} itinerary with {} days and {} activities",
        request.mode,
        itinerary.len(),
        itinerary.activity_count()
    );

    Ok(itinerary)
}

pub fn generate_basic(range: DateRange) -> Itinerary {
    let days = (1..=range.day_count())
        .map(|n| DayPlan::new(n, format!("Day {} highlights", n), BASIC_ACTIVITIES))
        .collect();

    Itinerary::from_generated(days)
}

/// Fixed two-day template. Dates and preferences are not consulted.
pub fn generate_advanced() -> Itinerary {
    Itinerary::from_generated(vec![
        DayPlan::new(
            1,
            "08:00 – 20:00 | Structured day",
            [
                "08:00 Breakfast",
                "09:00 Must-visit attraction",
                "13:00 Lunch",
                "15:00 Secondary activity",
                "19:00 Dinner",
            ],
        ),
        DayPlan::new(
            2,
            "Custom paced exploration",
            ["Morning nature walk", "Midday rest", "Evening cultural event"],
        ),
    ])
}

fn log_unused_preferences(mode: Mode, preferences: &Preferences) {
    if let Some(destination) = &preferences.destination {
        tracing::debug!("Destination '{}' accepted but not used by {} mode", destination, mode);
    }
    if !preferences.interests.is_empty() {
        tracing::debug!("Interests {:?} accepted but not used", preferences.interests);
    }
    if mode == Mode::Advanced {
        let advanced = &preferences.advanced;
        tracing::debug!(
            "Advanced preferences accepted but not used: window={:?}-{:?}, pace={}, transport={}, must_visit={:?}",
            advanced.day_start,
            advanced.day_end,
            advanced.pace,
            advanced.transport,
            advanced.must_visit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AdvancedPreferences, Pace, TransportMode};
    use crate::utils::error::PlanError;

    #[test]
    fn test_basic_three_day_range() {
        let itinerary = generate(&TripRequest::basic(Some("2024-01-01"), Some("2024-01-03"))).unwrap();

        assert_eq!(itinerary.len(), 3);
        for (i, day) in itinerary.days().iter().enumerate() {
            assert_eq!(day.day_number, i as u32 + 1);
            assert_eq!(day.title, format!("Day {} highlights", i + 1));
            assert_eq!(day.activities, BASIC_ACTIVITIES);
        }
    }

    #[test]
    fn test_same_day_and_inverted_ranges_yield_one_day() {
        let same = generate(&TripRequest::basic(Some("2024-01-05"), Some("2024-01-05"))).unwrap();
        assert_eq!(same.len(), 1);

        let inverted = generate(&TripRequest::basic(Some("2024-01-05"), Some("2023-12-25"))).unwrap();
        assert_eq!(inverted.len(), 1);
        assert_eq!(inverted.days()[0].title, "Day 1 highlights");
    }

    #[test]
    fn test_missing_dates_fail_in_basic_mode() {
        let missing_end = generate(&TripRequest::basic(Some("2024-01-01"), None));
        assert!(matches!(missing_end, Err(PlanError::InvalidInput { ref field, .. }) if field == "end"));

        let missing_start = generate(&TripRequest::basic(Some(""), Some("2024-01-01")));
        assert!(matches!(missing_start, Err(PlanError::InvalidInput { ref field, .. }) if field == "start"));
    }

    #[test]
    fn test_advanced_ignores_all_inputs() {
        let mut request = TripRequest::advanced(crate::domain::model::Preferences {
            destination: Some("Kyoto".to_string()),
            interests: vec!["food".to_string()],
            advanced: AdvancedPreferences {
                day_start: Some("6:00".to_string()),
                day_end: Some("23:00".to_string()),
                pace: Pace::Packed,
                must_visit: vec!["Fushimi Inari".to_string()],
                transport: TransportMode::Car,
            },
        });
        request.start = Some("not a date".to_string());

        let itinerary = generate(&request).unwrap();
        assert_eq!(itinerary, generate_advanced());
        assert_eq!(itinerary.len(), 2);
        assert_eq!(itinerary.days()[0].title, "08:00 – 20:00 | Structured day");
        assert_eq!(itinerary.days()[0].activities.len(), 5);
        assert_eq!(itinerary.days()[1].activities.len(), 3);
    }

    #[test]
    fn test_preferences_do_not_change_basic_output() {
        let plain = generate(&TripRequest::basic(Some("2024-03-01"), Some("2024-03-02"))).unwrap();

        let mut request = TripRequest::basic(Some("2024-03-01"), Some("2024-03-02"));
        request.preferences.destination = Some("Lisbon".to_string());
        request.preferences.interests = vec!["culture".to_string(), "nature".to_string()];

        assert_eq!(generate(&request).unwrap(), plain);
    }
}
