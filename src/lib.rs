pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    export::{export_csv, export_pdf},
    generator::generate,
    planner::Planner,
};
pub use domain::model::{
    DateRange, DayPlan, ExportArtifact, ExportFormat, Itinerary, Mode, Preferences, TripRequest,
};
pub use utils::error::{PlanError, Result};
