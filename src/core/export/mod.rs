pub mod document;
pub mod tabular;

pub use document::{export_pdf, layout_document, render_pdf, DocumentLayout};
pub use tabular::{export_csv, render_csv};

use crate::domain::model::{ExportArtifact, ExportFormat, Itinerary};
use crate::utils::error::Result;

/// Dispatches to the serializer for `format`. `None` when there is no itinerary yet.
pub fn export(format: ExportFormat, itinerary: Option<&Itinerary>) -> Result<Option<ExportArtifact>> {
    match format {
        ExportFormat::Csv => export_csv(itinerary),
        ExportFormat::Pdf => export_pdf(itinerary),
    }
}
