//! Alertify — community disaster report triage
//!
//! Reads one situation report per stdin line, classifies it, and fans the
//! classified events out to a live delivery task that prints them as JSONL.
//!
//! # Usage
//!
//! ```bash
//! # Classify reports from a file
//! cat reports.txt | alertify
//!
//! # Include non-disaster verdicts in the output
//! cat reports.txt | alertify --all
//!
//! # Use a specific config file
//! alertify --config ./alertify.toml < reports.txt
//! ```
//!
//! # Environment Variables
//!
//! - `ALERTIFY_CONFIG`: Path to the engine TOML config
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use alertify::{config, Broadcaster, DisasterClassifier, EngineConfig, RecvOutcome, ReportEvent};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "alertify")]
#[command(about = "Community disaster report triage for Lipa City")]
#[command(version)]
struct CliArgs {
    /// Path to the engine config TOML (overrides the search order)
    #[arg(long, env = "ALERTIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Author name attached to ingested reports
    #[arg(long, default_value = "Anonymous")]
    author: String,

    /// Also publish reports classified as not-disaster
    #[arg(long)]
    all: bool,

    /// Pretty-print delivered events
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // Load engine configuration
    let engine_config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::load(),
    };
    config::init(engine_config.clone());

    info!("Alertify — community disaster report triage");
    info!(
        fuzzy = engine_config.locator.fuzzy_enabled,
        channel_capacity = engine_config.broadcast.channel_capacity,
        "Engine ready"
    );

    let classifier =
        DisasterClassifier::from_config(&engine_config).context("building classifier")?;
    let broadcaster = Broadcaster::new(engine_config.broadcast.channel_capacity);
    let recv_timeout = Duration::from_secs(engine_config.broadcast.receive_timeout_secs);

    let cancel_token = CancellationToken::new();
    let mut tasks: JoinSet<Result<()>> = JoinSet::new();

    // Stop ingesting on Ctrl-C; in-flight events still drain below
    let signal_cancel = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    // Delivery task: drains one subscription and prints events as JSONL.
    // The Subscription drops (and deregisters) on every exit path.
    let mut subscription = broadcaster.subscribe();
    let subscription_id = subscription.id();
    let delivery_cancel = cancel_token.clone();
    let pretty = args.pretty;
    tasks.spawn(async move {
        loop {
            tokio::select! {
                () = delivery_cancel.cancelled() => break,
                outcome = subscription.recv(recv_timeout) => match outcome {
                    RecvOutcome::Event(payload) => {
                        if pretty {
                            let value: serde_json::Value = serde_json::from_str(&payload)
                                .context("re-parsing event payload")?;
                            println!("{}", serde_json::to_string_pretty(&value)?);
                        } else {
                            println!("{payload}");
                        }
                    }
                    RecvOutcome::KeepAlive => {
                        debug!("No events within timeout — keep-alive");
                    }
                    RecvOutcome::Closed => break,
                },
            }
        }
        Ok(())
    });

    // Ingest loop: one report per stdin line
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut next_id = 0u64;
    loop {
        let line = tokio::select! {
            () = cancel_token.cancelled() => break,
            line = lines.next_line() => line.context("reading stdin")?,
        };
        let Some(line) = line else { break };
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        let classification = classifier.classify(content);
        if !classification.is_disaster() && !args.all {
            debug!("Report not admitted — skipped");
            continue;
        }

        next_id += 1;
        let event = ReportEvent::new(
            next_id,
            args.author.clone(),
            content.to_string(),
            classification,
        );
        let delivered = broadcaster.publish(&event);
        debug!(id = event.id, delivered, "Report published");
    }

    // Deregistering drops the channel's sender; the delivery task drains
    // what is buffered, sees Closed, and exits.
    broadcaster.unsubscribe(subscription_id);
    while let Some(joined) = tasks.join_next().await {
        joined.context("delivery task panicked")??;
    }

    let stats = broadcaster.stats();
    info!(
        published = stats.published,
        delivered = stats.delivered,
        dropped = stats.dropped,
        "Ingest complete"
    );

    Ok(())
}
