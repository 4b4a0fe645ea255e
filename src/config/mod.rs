pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::toml_config::TomlConfig;
    use crate::domain::model::Mode;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "planmate")]
    #[command(about = "Generate a day-by-day travel itinerary and export it as CSV or PDF")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// First day of the trip (YYYY-MM-DD)
        #[arg(long)]
        pub start: Option<String>,

        /// Last day of the trip (YYYY-MM-DD)
        #[arg(long)]
        pub end: Option<String>,

        #[arg(long, value_enum)]
        pub mode: Option<Mode>,

        #[arg(long)]
        pub destination: Option<String>,

        #[arg(long, value_delimiter = ',')]
        pub interests: Vec<String>,

        /// Daily start time (e.g. 8:00)
        #[arg(long)]
        pub day_start: Option<String>,

        /// Daily end time (e.g. 20:00)
        #[arg(long)]
        pub day_end: Option<String>,

        /// balanced, packed or relaxed
        #[arg(long)]
        pub pace: Option<String>,

        /// Must-visit places (comma separated)
        #[arg(long, value_delimiter = ',')]
        pub must_visit: Vec<String>,

        /// walking, public-transport or car
        #[arg(long)]
        pub transport: Option<String>,

        /// Export formats (csv, pdf)
        #[arg(short, long, value_delimiter = ',')]
        pub format: Vec<String>,

        #[arg(short, long)]
        pub output_path: Option<String>,

        /// Print the itinerary to stdout
        #[arg(long)]
        pub print: bool,

        /// Print the itinerary structure as JSON to stdout
        #[arg(long)]
        pub json: bool,

        /// Show what would be generated without writing any files
        #[arg(long)]
        pub dry_run: bool,

        /// Emit JSON log lines
        #[arg(long)]
        pub json_logs: bool,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 載入設定檔（若有），再套用命令列覆蓋設定
        pub fn resolve(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };
            self.apply_overrides(&mut config)?;
            Ok(config)
        }

        pub fn apply_overrides(&self, config: &mut TomlConfig) -> Result<()> {
            if let Some(start) = &self.start {
                config.trip.start = Some(start.clone());
            }
            if let Some(end) = &self.end {
                config.trip.end = Some(end.clone());
            }
            if let Some(mode) = self.mode {
                config.trip.mode = Some(mode);
            }

            let preferences = &mut config.preferences;
            if let Some(destination) = &self.destination {
                preferences.destination = Some(destination.clone());
            }
            if !self.interests.is_empty() {
                preferences.interests = trimmed(&self.interests);
            }

            let advanced = &mut preferences.advanced;
            if let Some(day_start) = &self.day_start {
                advanced.day_start = Some(day_start.clone());
            }
            if let Some(day_end) = &self.day_end {
                advanced.day_end = Some(day_end.clone());
            }
            if let Some(pace) = &self.pace {
                advanced.pace = pace.parse()?;
            }
            if !self.must_visit.is_empty() {
                advanced.must_visit = trimmed(&self.must_visit);
            }
            if let Some(transport) = &self.transport {
                advanced.transport = transport.parse()?;
            }

            if !self.format.is_empty() {
                config.output.formats = self.format.iter().map(|f| f.trim().to_lowercase()).collect();
            }
            if let Some(output_path) = &self.output_path {
                config.output.path = output_path.clone();
            }
            if self.json_logs {
                config.logging.get_or_insert_with(Default::default).json = Some(true);
            }

            Ok(())
        }
    }

    fn trimmed(values: &[String]) -> Vec<String> {
        values
            .iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

}
