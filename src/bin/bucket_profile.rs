use anyhow::Context;
use calendar_buckets::core::Mode;
use calendar_buckets::utils::logger;
use calendar_buckets::{BucketEngine, BucketError, LocalStorage, ProfileConfig, RunSummary};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bucket-profile")]
#[command(about = "Runs a bucket selection saved in a TOML profile")]
struct Args {
    /// Path to TOML profile
    #[arg(short, long, default_value = "buckets.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the resolved files without reading or writing them
    #[arg(long)]
    dry_run: bool,
}

fn write_summary(path: &str, summary: &RunSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).with_context(|| format!("writing run summary to {}", path))?;
    tracing::info!("📝 Summary saved to: {}", path);
    Ok(())
}

fn exit_with(e: &BucketError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging is configured by the profile, so load failures only go to stderr.
    let config = match ProfileConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    logger::init_logger(args.verbose || config.verbose(), config.json_logs());
    tracing::info!("🚀 Loaded profile from: {}", args.config);

    let selection = match config.to_selection() {
        Ok(selection) => selection,
        Err(e) => {
            tracing::error!("❌ Profile validation failed: {}", e);
            exit_with(&e);
        }
    };

    tracing::info!(
        "📁 Root: {}, base name: {}, mode: {:?}",
        config.root(),
        config.base_name(),
        selection.mode
    );

    let storage = LocalStorage::new(config.root());
    let mut engine = BucketEngine::new(storage, rand::rng()).with_base_name(config.base_name());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be read or written");
        for bucket in engine.plan(&selection) {
            println!("{}", bucket);
        }
        return Ok(());
    }

    let summary = match engine.execute(&selection) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            exit_with(&e);
        }
    };

    match summary.mode {
        Mode::Read => println!("Total time read: {}", summary.aggregate),
        Mode::Write => println!("Files written: {}", summary.files_written),
    }

    if let Some(path) = config.summary_path() {
        write_summary(path, &summary)?;
    }

    Ok(())
}
