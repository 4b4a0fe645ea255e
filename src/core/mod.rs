pub mod export;
pub mod generator;
pub mod planner;

pub use crate::domain::model::{DayPlan, ExportArtifact, ExportFormat, Itinerary, TripRequest};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
