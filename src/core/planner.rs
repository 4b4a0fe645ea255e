use crate::core::export;
use crate::core::generator;
use crate::domain::model::{ExportArtifact, ExportFormat, Itinerary, TripRequest};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Caller-owned session state: the itinerary currently on screen, if any.
///
/// Generation replaces the itinerary wholesale. A failed generation leaves the previous one
/// untouched.
#[derive(Debug, Default)]
pub struct Planner {
    itinerary: Option<Itinerary>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    pub fn generate(&mut self, request: &TripRequest) -> Result<&Itinerary> {
        tracing::info!("Generating {} itinerary", request.mode);
        let itinerary = generator::generate(request)?;
        tracing::info!(
            "Itinerary ready: {} days, {} activities",
            itinerary.len(),
            itinerary.activity_count()
        );

        Ok(&*self.itinerary.insert(itinerary))
    }

    pub fn clear(&mut self) {
        self.itinerary = None;
    }

    pub fn export(&self, format: ExportFormat) -> Result<Option<ExportArtifact>> {
        export::export(format, self.itinerary.as_ref())
    }

    /// Exports and writes each format through `storage`, returning the written file names.
    pub fn export_to<S: Storage>(&self, storage: &S, formats: &[ExportFormat]) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in formats {
            let Some(artifact) = self.export(*format)? else {
                continue;
            };

            tracing::debug!(
                "Writing {} ({}, {} bytes)",
                artifact.file_name,
                artifact.mime_type,
                artifact.bytes.len()
            );
            storage.write_file(artifact.file_name, &artifact.bytes)?;
            written.push(artifact.file_name.to_string());
        }

        Ok(written)
    }
}
