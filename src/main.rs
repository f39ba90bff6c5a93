//! Bloglist - blog list service with like statistics
//!
//! Serves a JSON API for creating, listing, updating and deleting blog
//! entries, and reports aggregate statistics over them.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, config, bind failure, etc.)

mod analysis;
mod cli;
mod config;
mod models;
mod report;
mod server;
mod store;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::Config;
use std::path::Path;
use std::sync::Arc;
use store::{BlogRepository, MemoryBlogStore};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // No logging needed to write a config file
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("Bloglist v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args).await {
        error!("Bloglist failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .bloglist.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(config::CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            config::CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", config::CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", config::CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    match args.report {
        Some(ref input) => run_report(input, args.output.as_deref(), &config).await,
        None => run_server(&config).await,
    }
}

/// Serve the HTTP API until shutdown.
async fn run_server(config: &Config) -> Result<()> {
    let store = Arc::new(MemoryBlogStore::new());

    if let Some(ref seed) = config.store.seed_file {
        store
            .seed_from_file(seed)
            .await
            .with_context(|| format!("Failed to seed store from {}", seed.display()))?;
    }

    server::run_server(&config.server, store).await
}

/// Handle --report: load blogs from a file, print statistics, exit.
async fn run_report(input: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let store = MemoryBlogStore::new();
    store
        .seed_from_file(input)
        .await
        .with_context(|| format!("Failed to read blogs from {}", input.display()))?;

    let blogs = store.list().await?;
    let report = report::build_report(
        &input.display().to_string(),
        &blogs,
        config.report.top_authors,
    );

    let content = match config.report.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => report::generate_markdown_report(&report),
    };

    match output {
        Some(path) => {
            report::write_report(&content, path)?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", config::CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
