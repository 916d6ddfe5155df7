use analytics::AnalyticsEngine;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::Config;
use core_types::FilterParams;
use indicatif::{ProgressBar, ProgressStyle};
use record_store::RecordStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use web_server::AppState;

mod logging;
mod render;

/// The main entry point for the Salescope dashboard application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => configuration::load_config_from(path)?,
        None => configuration::load_config()?,
    };
    if let Some(path) = cli.data {
        config.data.path = path;
    }

    // Keep the guard alive so buffered file logs are flushed on exit.
    let _log_guard = logging::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Filters => handle_filters(&config),
        Commands::Serve(args) => handle_serve(args, config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Recomputes sales dashboard views from an order report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to read instead of `config.toml`; it must exist.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Order report CSV, overriding `data.path` from the configuration.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every dashboard view for a date range and category.
    Report(ReportArgs),
    /// List the categories and date bounds available for filtering.
    Filters,
    /// Serve the dashboard views as a JSON API.
    Serve(ServeArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// First day to include (format: YYYY-MM-DD). Unparsable values are ignored.
    #[arg(long)]
    from: Option<String>,

    /// Last day to include (format: YYYY-MM-DD). Unparsable values are ignored.
    #[arg(long)]
    to: Option<String>,

    /// Restrict to one product category ("All Categories" means no restriction).
    #[arg(long)]
    category: Option<String>,

    /// Emit the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on, overriding `server.address`.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the base table, showing a spinner while a large file is parsed.
fn load_store(config: &Config) -> anyhow::Result<RecordStore> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Loading {}...", config.data.path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let store = RecordStore::load(&config.data.path)
        .with_context(|| format!("failed to load orders from {}", config.data.path.display()));
    spinner.finish_and_clear();
    store
}

fn handle_report(args: ReportArgs, config: &Config) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let engine = AnalyticsEngine::new(config.dashboard.clone())?;

    let params = FilterParams::from_raw(args.from.as_deref(), args.to.as_deref(), args.category.as_deref());
    let report = engine.calculate(store.orders(), &params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report);
    }
    Ok(())
}

fn handle_filters(config: &Config) -> anyhow::Result<()> {
    let store = load_store(config)?;
    render::print_filter_options(&store.filter_options());
    Ok(())
}

async fn handle_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let addr = args.addr.unwrap_or(config.server.address);
    let store = load_store(&config)?;
    let engine = AnalyticsEngine::new(config.dashboard)?;
    tracing::info!(orders = store.len(), "Base table ready.");

    web_server::run_server(addr, AppState { store, engine }).await
}
