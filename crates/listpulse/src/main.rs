//! listpulse - Mailing-list statistics as telemetry metrics
//!
//! # Usage
//!
//! ```bash
//! # Run one collection cycle for every configured connector (default)
//! listpulse --config configs/listpulse.toml
//!
//! # Ad-hoc collection with an API key, line protocol output
//! MAILCHIMP_API_KEY=xxx-us6 listpulse collect --output line
//! ```
//!
//! Scheduling is left to the caller (cron, systemd timer, a telemetry agent's
//! exec input): every invocation runs exactly one cycle.

mod cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listpulse_config::{Config, LogConfig, LogFormat, LogLevel, LogOutput};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// listpulse - Mailing-list statistics as telemetry metrics
#[derive(Parser, Debug)]
#[command(name = "listpulse")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one collection cycle and print the metrics
    Collect(cmd::collect::CollectArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.log, cli.log_level)?;

    match cli.command {
        Some(Command::Collect(args)) => cmd::collect::run(args, &config).await,
        // No subcommand = collect with defaults
        None => cmd::collect::run(cmd::collect::CollectArgs::default(), &config).await,
    }
}

/// Load the config file if one was given, defaults otherwise
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Initialize the tracing subscriber for logging
///
/// Level resolution: CLI flag > config file > "info".
fn init_logging(log: &LogConfig, cli_level: Option<LogLevel>) -> Result<()> {
    let level = cli_level.unwrap_or(log.level);
    let filter = EnvFilter::new(level.as_str());

    let (writer, ansi) = match &log.output {
        LogOutput::Stdout => (BoxMakeWriter::new(std::io::stdout), true),
        LogOutput::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(ansi)
        .with_writer(writer);

    match log.format {
        LogFormat::Console => tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(layer.json())
            .with(filter)
            .init(),
    }

    Ok(())
}
