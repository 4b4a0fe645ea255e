use chrono::{Duration, NaiveDate};
use planmate::core::generator::{generate_advanced, BASIC_ACTIVITIES};
use planmate::{generate, Mode, PlanError, Planner, Preferences, TripRequest};

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn test_day_count_matches_inclusive_difference() {
    let start = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();

    for offset in -5..=45 {
        let end = start + Duration::days(offset);
        let request = TripRequest::basic(Some(&iso(start)), Some(&iso(end)));
        let itinerary = generate(&request).unwrap();

        let expected = if offset < 0 { 1 } else { offset as usize + 1 };
        assert_eq!(itinerary.len(), expected, "offset {}", offset);
        assert!(!itinerary.is_empty());
    }
}

#[test]
fn test_day_numbers_are_contiguous() {
    let itinerary = generate(&TripRequest::basic(Some("2024-02-25"), Some("2024-03-05"))).unwrap();

    let numbers: Vec<u32> = itinerary.days().iter().map(|d| d.day_number).collect();
    let expected: Vec<u32> = (1..=itinerary.len() as u32).collect();
    assert_eq!(numbers, expected);
    // 2024 是閏年
    assert_eq!(itinerary.len(), 10);
}

#[test]
fn test_three_day_trip() {
    let itinerary = generate(&TripRequest::basic(Some("2024-01-01"), Some("2024-01-03"))).unwrap();

    assert_eq!(itinerary.len(), 3);
    assert_eq!(itinerary.activity_count(), 12);
    for day in itinerary.days() {
        assert_eq!(day.activities, BASIC_ACTIVITIES);
    }
}

#[test]
fn test_same_day_trip_is_one_day() {
    let itinerary = generate(&TripRequest::basic(Some("2024-01-05"), Some("2024-01-05"))).unwrap();
    assert_eq!(itinerary.len(), 1);
    assert_eq!(itinerary.days()[0].title, "Day 1 highlights");
}

#[test]
fn test_missing_end_date_sets_no_itinerary() {
    let mut planner = Planner::new();
    let result = planner.generate(&TripRequest::basic(Some("2024-01-01"), None));

    match result {
        Err(PlanError::InvalidInput { field, .. }) => assert_eq!(field, "end"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert!(planner.itinerary().is_none());
}

#[test]
fn test_unparseable_date_is_invalid_input() {
    let result = generate(&TripRequest::basic(Some("2024-13-40"), Some("2024-01-01")));
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
}

#[test]
fn test_advanced_mode_returns_fixed_template() {
    let inputs = [
        TripRequest::advanced(Preferences::default()),
        TripRequest {
            start: Some("2030-06-01".to_string()),
            end: Some("2030-06-30".to_string()),
            mode: Mode::Advanced,
            preferences: Preferences {
                destination: Some("Reykjavík".to_string()),
                ..Preferences::default()
            },
        },
        TripRequest {
            start: None,
            end: None,
            mode: Mode::Advanced,
            preferences: Preferences::default(),
        },
    ];

    for request in &inputs {
        let itinerary = generate(request).unwrap();
        assert_eq!(itinerary, generate_advanced());

        let day_one = &itinerary.days()[0];
        assert_eq!(day_one.title, "08:00 – 20:00 | Structured day");
        assert_eq!(
            day_one.activities,
            vec![
                "08:00 Breakfast",
                "09:00 Must-visit attraction",
                "13:00 Lunch",
                "15:00 Secondary activity",
                "19:00 Dinner",
            ]
        );

        let day_two = &itinerary.days()[1];
        assert_eq!(day_two.title, "Custom paced exploration");
        assert_eq!(
            day_two.activities,
            vec!["Morning nature walk", "Midday rest", "Evening cultural event"]
        );
    }
}
