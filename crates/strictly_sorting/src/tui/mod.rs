//! Terminal UI for Strictly Sorting

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, KEY_HELP, action_for};
pub use ui::draw;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

use crate::config::CoachConfig;

/// Poll interval while waiting for the learner.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits.
pub async fn run_tui(config: CoachConfig, rng: StdRng) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,strictly_bubble=debug")
            }),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Strictly Sorting TUI");

    let mut app = App::new(config.list_spec(), rng).context("Failed to generate first list")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, config.auto_delay()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!(steps = app.session().steps(), "TUI closed");
    res
}

/// Event loop: draw, wait for a key or the next auto-play tick, repeat.
#[instrument(skip_all, fields(delay = ?delay))]
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    delay: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        let timeout = if app.is_auto() { delay } else { IDLE_POLL };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match action_for(key.code) {
                    Action::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    Action::Run(command) => app.handle(command),
                    Action::StopAuto => app.stop_auto(),
                    Action::Ignore => debug!(key = ?key.code, "Unbound key"),
                }
            }
        } else if app.is_auto() {
            app.tick();
        }

        sleep(Duration::from_millis(10)).await;
    }
}
