//! Headless auto-play: prints each snapshot to a writer.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use strictly_bubble::{Session, Snapshot, commands};
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Height of the plain-text chart, in rows.
const TEXT_CHART_HEIGHT: usize = 8;

/// How snapshots are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable blocks with a text bar chart.
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes one snapshot in the given format.
pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(snapshot).context("Failed to encode snapshot")?;
            writeln!(out, "{}", line)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", snapshot.feedback())?;
            writeln!(out, "Array: {:?}", snapshot.array())?;
            writeln!(out, "{}", snapshot.chart().render_text(TEXT_CHART_HEIGHT))?;
            writeln!(out, "{}", snapshot.steps_text())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Plays the session to completion, writing the opening state and every step.
///
/// Stops early, without the completion snapshot, when `shutdown` resolves.
/// Returns the session as it stood when playback ended.
#[instrument(skip(session, out, shutdown), fields(len = session.array().len()))]
pub async fn run_auto<W, F>(
    session: Session,
    delay: Duration,
    format: OutputFormat,
    out: &mut W,
    shutdown: F,
) -> Result<Session>
where
    W: Write,
    F: Future<Output = ()>,
{
    info!(?delay, ?format, "Starting headless auto sort");
    write_snapshot(out, &session.snapshot(), format)?;

    tokio::pin!(shutdown);
    let mut auto = commands::auto_sort(session);

    while let Some(snapshot) = auto.next() {
        write_snapshot(out, &snapshot, format)?;
        if auto.is_finished() {
            break;
        }
        tokio::select! {
            _ = &mut shutdown => {
                info!("Auto sort cancelled");
                return Ok(auto.into_session());
            }
            _ = sleep(delay) => {}
        }
    }

    let session = auto.into_session();
    if format == OutputFormat::Text {
        writeln!(out, "History:\n{}", session.history().text())?;
    }
    debug!(steps = session.steps(), "Headless auto sort finished");
    Ok(session)
}
