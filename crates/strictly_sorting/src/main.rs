//! Strictly Sorting - Unified CLI
//!
//! Interactive bubble sort coach and headless auto-play.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use strictly_bubble::Session;
use strictly_sorting::{Cli, CoachConfig, Command, OutputFormat, make_rng, run_auto, tui};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CoachConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Tui { list } => {
            let config = list.apply(config);
            config.validate()?;
            tui::run_tui(config, make_rng(list.seed)).await
        }
        Command::Auto {
            list,
            values,
            delay_ms,
            json,
        } => {
            initialize_stderr_tracing();
            let mut config = list.apply(config);
            if let Some(ms) = delay_ms {
                config = config.with_auto_delay_ms(ms);
            }
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            run_headless(config, values, list.seed, format).await
        }
    }
}

/// Auto-sorts a given or generated list to stdout; Ctrl+C stops early.
#[instrument(skip(config))]
async fn run_headless(
    config: CoachConfig,
    values: Option<Vec<u32>>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let session = match values {
        Some(values) => Session::from_values(values),
        None => {
            config.validate()?;
            Session::generate(config.list_spec(), &mut make_rng(seed))
                .context("Failed to generate list")?
        }
    };

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; run to completion.
            std::future::pending::<()>().await;
        }
    };

    let mut stdout = io::stdout().lock();
    let session = run_auto(session, config.auto_delay(), format, &mut stdout, shutdown).await?;
    info!(steps = session.steps(), done = session.is_done(), "Headless run finished");
    Ok(())
}

#[instrument]
fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_sorting=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Headless tracing initialized");
}
