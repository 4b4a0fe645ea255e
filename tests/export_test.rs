use lopdf::content::Content;
use lopdf::{Document, Object};
use planmate::core::export::{layout_document, render_csv};
use planmate::{export_csv, export_pdf, generate, DayPlan, Itinerary, TripRequest};

fn sample_itinerary() -> Itinerary {
    Itinerary::from_days(vec![
        DayPlan::new(1, "Old town, \"the\" classics", ["Tram 28", "Pastéis de nata"]),
        DayPlan::new(2, "Coast", ["Train to \"Cascais\"", "Beach, then dinner", "Sunset"]),
    ])
    .unwrap()
}

/// 取出每一頁的 Tj 文字 (WinAnsi bytes)
fn page_texts(bytes: &[u8]) -> Vec<Vec<Vec<u8>>> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|page_id| {
            let content = Content::decode(&doc.get_page_content(*page_id).unwrap()).unwrap();
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(text, _)) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_csv_row_count_is_activity_count_plus_header() {
    let itinerary = generate(&TripRequest::basic(Some("2024-01-01"), Some("2024-01-03"))).unwrap();
    let artifact = export_csv(Some(&itinerary)).unwrap().unwrap();
    let text = String::from_utf8(artifact.bytes).unwrap();

    assert_eq!(text.split('\n').count(), 13);
    assert!(!text.ends_with('\n'));
    assert!(text.starts_with("\"Day\",\"Title\",\"Activity\"\n\"Day 1\",\"Day 1 highlights\",\"Morning exploration\""));
}

#[test]
fn test_csv_round_trip_reconstructs_triples() -> anyhow::Result<()> {
    let itinerary = sample_itinerary();
    let bytes = render_csv(&itinerary)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let headers = reader.headers()?.clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Day", "Title", "Activity"]);

    let parsed: Vec<(String, String, String)> = reader
        .deserialize()
        .collect::<Result<_, csv::Error>>()?;

    let expected: Vec<(String, String, String)> = itinerary
        .days()
        .iter()
        .flat_map(|day| {
            day.activities
                .iter()
                .map(move |a| (format!("Day {}", day.day_number), day.title.clone(), a.clone()))
        })
        .collect();

    assert_eq!(parsed, expected);
    assert_eq!(parsed.len(), itinerary.activity_count());
    Ok(())
}

#[test]
fn test_pdf_lines_follow_day_and_activity_order() {
    let itinerary = sample_itinerary();
    let artifact = export_pdf(Some(&itinerary)).unwrap().unwrap();
    assert_eq!(artifact.file_name, "planmate-itinerary.pdf");

    let pages = page_texts(&artifact.bytes);
    assert_eq!(pages.len(), 1);

    let expected: Vec<Vec<u8>> = vec![
        b"PlanMate Itinerary".to_vec(),
        b"Day 1: Old town, \"the\" classics".to_vec(),
        b"\x95 Tram 28".to_vec(),
        b"\x95 Past\xe9is de nata".to_vec(),
        b"Day 2: Coast".to_vec(),
        b"\x95 Train to \"Cascais\"".to_vec(),
        b"\x95 Beach, then dinner".to_vec(),
        b"\x95 Sunset".to_vec(),
    ];
    assert_eq!(pages[0], expected);
}

#[test]
fn test_pdf_paginates_long_trips() {
    let itinerary = generate(&TripRequest::basic(Some("2024-07-01"), Some("2024-07-21"))).unwrap();
    let layout = layout_document(&itinerary);
    let artifact = export_pdf(Some(&itinerary)).unwrap().unwrap();

    let pages = page_texts(&artifact.bytes);
    assert!(pages.len() > 1);
    assert_eq!(pages.len(), layout.page_count());

    let all: Vec<&Vec<u8>> = pages.iter().flatten().collect();
    let headings = all.iter().filter(|t| t.starts_with(b"Day ")).count();
    let bullets = all.iter().filter(|t| t.first() == Some(&0x95)).count();
    assert_eq!(headings, itinerary.len());
    assert_eq!(bullets, itinerary.activity_count());
}

#[test]
fn test_exports_without_itinerary_produce_nothing() {
    assert!(export_csv(None).unwrap().is_none());
    assert!(export_pdf(None).unwrap().is_none());
}
