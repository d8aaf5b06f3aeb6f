use calendar_buckets::core::Mode;
use calendar_buckets::utils::logger;
use calendar_buckets::{BucketEngine, BucketError, CliConfig, LocalStorage};
use clap::Parser;

fn report_and_exit(e: &BucketError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting calendar-buckets");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let selection = match config.to_selection() {
        Ok(selection) => selection,
        Err(e) => report_and_exit(&e),
    };

    let storage = LocalStorage::new(config.root.clone());
    tracing::info!("📁 Bucket root: {}", storage.base_path().display());
    let mut engine =
        BucketEngine::new(storage, rand::rng()).with_base_name(config.base_name.clone());

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be read or written");
        for path in engine.planned_files(&selection) {
            println!("{}", path.display());
        }
        return;
    }

    match engine.execute(&selection) {
        Ok(summary) => match summary.mode {
            Mode::Read => println!("Total time read: {}", summary.aggregate),
            Mode::Write => println!("Files written: {}", summary.files_written),
        },
        Err(e) => report_and_exit(&e),
    }
}
