use crate::domain::model::{ExportArtifact, Itinerary};
use crate::utils::error::{PlanError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const CSV_FILE_NAME: &str = "planmate-itinerary.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

const HEADER: [&str; 3] = ["Day", "Title", "Activity"];

/// One row per activity, every field quoted, rows joined by `\n`.
pub fn render_csv(itinerary: &Itinerary) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for day in itinerary.days() {
        let label = day.label();
        for activity in &day.activities {
            writer.write_record([label.as_str(), day.title.as_str(), activity.as_str()])?;
        }
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| PlanError::IoError(e.into_error()))?;

    // 行與行之間用換行分隔，最後一行不帶換行
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(bytes)
}

pub fn export_csv(itinerary: Option<&Itinerary>) -> Result<Option<ExportArtifact>> {
    let Some(itinerary) = itinerary else {
        tracing::warn!("CSV export requested before any itinerary was generated, skipping");
        return Ok(None);
    };

    let bytes = render_csv(itinerary)?;
    tracing::debug!(
        "Rendered CSV with {} activity rows ({} bytes)",
        itinerary.activity_count(),
        bytes.len()
    );

    Ok(Some(ExportArtifact {
        file_name: CSV_FILE_NAME,
        mime_type: CSV_MIME_TYPE,
        bytes,
    }))
}
