//! Application state and logic.

use rand::rngs::StdRng;
use strictly_bubble::{AutoPlay, Command, GenerateError, ListSpec, Session, Snapshot, commands};
use tracing::{debug, info, instrument, warn};

/// Whether the learner or auto-play is driving.
#[derive(Debug)]
enum Stage {
    /// Waiting for the learner's decisions.
    Manual(Session),
    /// Auto-play owns the session until it finishes or is stopped.
    Auto(AutoPlay),
}

impl Stage {
    fn session(&self) -> &Session {
        match self {
            Stage::Manual(session) => session,
            Stage::Auto(auto) => auto.session(),
        }
    }

    fn into_session(self) -> Session {
        match self {
            Stage::Manual(session) => session,
            Stage::Auto(auto) => auto.into_session(),
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    stage: Stage,
    snapshot: Snapshot,
    spec: ListSpec,
    rng: StdRng,
}

impl App {
    /// Creates the app with a freshly generated list.
    #[instrument(skip(rng))]
    pub fn new(spec: ListSpec, mut rng: StdRng) -> Result<Self, GenerateError> {
        let (session, snapshot) = commands::generate(spec, &mut rng)?;
        Ok(Self {
            stage: Stage::Manual(session),
            snapshot,
            spec,
            rng,
        })
    }

    /// Returns the display values to render.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the session being shown.
    pub fn session(&self) -> &Session {
        self.stage.session()
    }

    /// Returns true while auto-play is running.
    pub fn is_auto(&self) -> bool {
        matches!(self.stage, Stage::Auto(_))
    }

    /// Runs a coach command.
    ///
    /// Generate interrupts a running auto-play and replaces the list. A
    /// decision during auto-play only stops it, showing the pair the learner
    /// resumes from; the next decision is scored against that pair.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        debug!(?command, "Handling command");
        match command {
            Command::Generate => {
                self.stop_auto();
                match commands::generate(self.spec, &mut self.rng) {
                    Ok((session, snapshot)) => {
                        self.stage = Stage::Manual(session);
                        self.snapshot = snapshot;
                    }
                    Err(e) => warn!(error = %e, "Failed to generate list"),
                }
            }
            Command::Decide(decision) => {
                if self.is_auto() {
                    // The pair on screen was already compared by auto-play.
                    info!(?decision, "Decision stops auto sort without scoring");
                    self.stop_auto();
                    return;
                }
                let session = self.take_session();
                let (session, outcome) = commands::decide(session, decision);
                debug!(verdict = %outcome.verdict(), "Decision applied to UI state");
                self.stage = Stage::Manual(session);
                self.snapshot = outcome.into_snapshot();
            }
            Command::AutoSort => {
                if self.is_auto() {
                    debug!("Auto sort already running");
                    return;
                }
                let session = self.take_session();
                self.stage = Stage::Auto(commands::auto_sort(session));
            }
        }
    }

    /// Pulls the next auto-play snapshot; returns false if nothing is running.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> bool {
        let Stage::Auto(auto) = &mut self.stage else {
            return false;
        };
        if let Some(snapshot) = auto.next() {
            self.snapshot = snapshot;
        }
        if auto.is_finished() {
            info!("Auto sort finished");
            let session = self.take_session();
            self.stage = Stage::Manual(session);
        }
        true
    }

    /// Stops auto-play, keeping the array where it is.
    #[instrument(skip(self))]
    pub fn stop_auto(&mut self) {
        if self.is_auto() {
            let session = self.take_session();
            self.snapshot = session.snapshot();
            self.stage = Stage::Manual(session);
        }
    }

    fn take_session(&mut self) -> Session {
        let placeholder = Stage::Manual(Session::from_values(Vec::new()));
        std::mem::replace(&mut self.stage, placeholder).into_session()
    }
}
