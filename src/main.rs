use clap::Parser;
use planmate::core::ConfigProvider;
use planmate::utils::error::{ErrorSeverity, PlanError};
use planmate::utils::{logger, validation::Validate};
use planmate::{CliConfig, LocalStorage, Planner, TomlConfig};

fn main() {
    let args = CliConfig::parse();

    // 先載入設定，日誌層級可能來自設定檔
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if config.json_logging() {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }

    tracing::info!("Starting planmate");
    if args.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!(
            "❌ planmate failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }
}

fn run(args: &CliConfig, config: &TomlConfig) -> Result<(), PlanError> {
    let request = config.trip_request();
    let formats = config.export_formats();

    let mut planner = Planner::new();
    let itinerary = planner.generate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(itinerary)?);
    } else if args.print || args.dry_run {
        println!("{}", itinerary);
    }

    if args.dry_run {
        display_dry_run_summary(config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path());
    let written = planner.export_to(&storage, &formats)?;

    println!("✅ Itinerary generated ({} days)", planner.itinerary().map_or(0, |i| i.len()));
    for file_name in &written {
        let path = storage.resolve(file_name);
        tracing::info!("📁 Exported {}", path.display());
        println!("📁 {}", path.display());
    }

    Ok(())
}

fn display_dry_run_summary(config: &TomlConfig) {
    let formats: Vec<String> = config
        .export_formats()
        .iter()
        .map(|f| f.to_string())
        .collect();

    println!("🔍 Dry run, nothing written:");
    println!("  Mode: {}", config.mode());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", formats.join(", "));
}

fn exit_code(error: &PlanError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
