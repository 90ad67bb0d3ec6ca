//! Qualifying offer main entry point
//!
//! This is the command-line interface for the MLB qualifying offer calculator.

use anyhow::Context;
use clap::{Parser, Subcommand};
use qualifying_offer::api::{self, AppState};
use qualifying_offer::config::{load_config_with_hash, validate, Config};
use qualifying_offer::output::{render, write_report, OutputFormat};
use qualifying_offer::{fetch_qualifying_offer, Fetcher};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// MLB qualifying offer calculator
///
/// Fetches the league salary table, keeps every valid salary, and averages
/// the 125 highest into the upcoming qualifying offer.
#[derive(Parser, Debug)]
#[command(name = "qualifying-offer")]
#[command(version)]
#[command(about = "MLB qualifying offer calculator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Salary document URL, overriding the configuration
    #[arg(long, value_name = "URL", global = true)]
    url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the dataset once and print the qualifying offer (default)
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Only list players whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Serve the HTTP API
    Serve {
        /// Socket address to listen on, overriding the configuration
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    match cli.command.unwrap_or(Command::Report {
        format: OutputFormat::Text,
        search: None,
        output: None,
    }) {
        Command::Report {
            format,
            search,
            output,
        } => handle_report(&config, format, search.as_deref(), output).await,
        Command::Serve { .. } => handle_serve(config).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("qualifying_offer=info,warn"),
            1 => EnvFilter::new("qualifying_offer=debug,info"),
            2 => EnvFilter::new("qualifying_offer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if given, then applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.source.url = url.clone();
    }
    if let Some(Command::Serve { bind: Some(bind) }) = &cli.command {
        config.server.bind = bind.clone();
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Handles the report command: one fetch, one rendering
async fn handle_report(
    config: &Config,
    format: OutputFormat,
    search: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(&config.source)?;
    let result = fetch_qualifying_offer(&fetcher, config.offer.pool_size)
        .await
        .context("unable to load data")?;

    match output {
        Some(path) => {
            write_report(&result, format, search, &path)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => print!("{}", render(&result, format, search)?),
    }

    Ok(())
}

/// Handles the serve command
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Salary dataset: {}", config.source.url);
    let state = AppState::from_config(&config)?;

    api::serve(&config.server.bind, state)
        .await
        .context("API server failed")?;
    Ok(())
}
