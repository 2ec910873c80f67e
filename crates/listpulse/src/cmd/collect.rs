//! Collect command - Run one collection cycle
//!
//! Builds every enabled connector, runs one cycle per connector and writes
//! the resulting metrics to stdout.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use listpulse_config::Config;
use listpulse_connectors::{
    Connector, MailChimp, MailChimpConnectorConfig, available_connectors,
};
use listpulse_protocol::{Metric, MetricBuffer};
use std::io::{self, Write};
use tracing::{error, info};

/// Metric output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// InfluxDB line protocol
    Line,
}

/// Collect command arguments
#[derive(Args, Debug, Default)]
pub struct CollectArgs {
    /// Mailchimp API key; runs a single ad-hoc connector instead of the configured ones
    #[arg(long, env = "MAILCHIMP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,
}

/// Run the collect command
pub async fn run(args: CollectArgs, config: &Config) -> Result<()> {
    let connectors = build_connectors(&args, config)?;
    if connectors.is_empty() {
        bail!("no connectors configured; pass --api-key or a --config with [connectors.*]");
    }

    let mut failed = 0usize;
    for (name, connector) in &connectors {
        let mut buffer = MetricBuffer::new();
        match connector.collect(&mut buffer).await {
            Ok(()) => {
                info!(
                    connector = %name,
                    metrics = buffer.len(),
                    "collection complete"
                );
                let stdout = io::stdout();
                write_metrics(&mut stdout.lock(), buffer.metrics(), args.output)
                    .context("failed to write metrics")?;
            }
            Err(e) => {
                error!(
                    connector = %name,
                    kind = ?e.kind(),
                    error = %e,
                    "collection failed"
                );
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} connectors failed", failed, connectors.len());
    }

    Ok(())
}

/// Build the connectors to run, sorted by name
fn build_connectors(args: &CollectArgs, config: &Config) -> Result<Vec<(String, MailChimp)>> {
    if let Some(ref api_key) = args.api_key {
        let connector = MailChimp::from_config(&MailChimpConnectorConfig::with_api_key(api_key))
            .context("failed to create Mailchimp connector")?;
        return Ok(vec![("mailchimp".to_string(), connector)]);
    }

    let mut connectors = Vec::new();
    for (name, raw) in config.connectors.enabled() {
        match raw.connector_type.as_str() {
            "mailchimp" => {
                let connector = MailChimpConnectorConfig::from_toml(&raw.config)
                    .and_then(|c| MailChimp::from_config(&c))
                    .with_context(|| format!("failed to create connector '{}'", name))?;
                connectors.push((name.clone(), connector));
            }
            other => bail!(
                "connector '{}' has unknown type '{}'. Available: {:?}",
                name,
                other,
                available_connectors()
            ),
        }
    }
    connectors.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(connectors)
}

/// Write metrics one per line in the chosen format
fn write_metrics<W: Write>(out: &mut W, metrics: &[Metric], format: OutputFormat) -> Result<()> {
    for metric in metrics {
        match format {
            OutputFormat::Json => serde_json::to_writer(&mut *out, metric)?,
            OutputFormat::Line => out.write_all(metric.to_line_protocol().as_bytes())?,
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
