//! Key bindings.

use crossterm::event::KeyCode;
use strictly_bubble::{Command, Decision};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a coach command.
    Run(Command),
    /// Stop auto-play, keeping the current array.
    StopAuto,
    /// Leave the application.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('g') | KeyCode::Char('n') => Action::Run(Command::Generate),
        KeyCode::Char('s') | KeyCode::Left => Action::Run(Command::Decide(Decision::Swap)),
        KeyCode::Char('d') | KeyCode::Right => Action::Run(Command::Decide(Decision::DontSwap)),
        KeyCode::Char('a') => Action::Run(Command::AutoSort),
        KeyCode::Esc => Action::StopAuto,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Ignore,
    }
}

/// One-line help shown at the bottom of the screen.
pub const KEY_HELP: &str =
    "[g] New list  [s/←] Swap  [d/→] Don't Swap  [a] Auto Sort  [Esc] Stop  [q] Quit";
