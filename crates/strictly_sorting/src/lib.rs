//! Strictly Sorting - bubble sort coach
//!
//! Front ends over [`strictly_bubble`]: an interactive terminal UI where the
//! learner decides every swap, and a headless auto-play printer.
//!
//! # Architecture
//!
//! - **Config**: TOML file with command-line overrides
//! - **TUI**: ratatui screen with the array, bar chart, feedback and history
//! - **Headless**: auto-play to any writer, as text or JSON lines

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod headless;
pub mod tui;

pub use cli::{Cli, Command, ListArgs};
pub use config::{CoachConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use headless::{OutputFormat, run_auto, write_snapshot};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Creates the list RNG, seeded for reproducible runs when a seed is given.
#[instrument]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded RNG");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
