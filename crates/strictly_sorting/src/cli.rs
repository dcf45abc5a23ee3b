//! Command-line interface for strictly_sorting.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, instrument};

use crate::config::{CoachConfig, DEFAULT_CONFIG_PATH};

/// Strictly Sorting - learn bubble sort one swap at a time
#[derive(Parser, Debug)]
#[command(name = "strictly_sorting")]
#[command(about = "Bubble sort coach: decide every swap, or watch it auto-sort", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal UI
    Tui {
        /// List generation overrides
        #[command(flatten)]
        list: ListArgs,
    },

    /// Auto-sort a list and print every step to stdout
    Auto {
        /// List generation overrides
        #[command(flatten)]
        list: ListArgs,

        /// Sort these values instead of a random list (comma-separated)
        #[arg(long, value_delimiter = ',')]
        values: Option<Vec<u32>>,

        /// Pause between steps in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print one JSON snapshot per line instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Overrides for the list section of the config.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Number of elements in generated lists
    #[arg(long)]
    pub len: Option<usize>,

    /// Smallest value in generated lists
    #[arg(long)]
    pub min: Option<u32>,

    /// Largest value in generated lists
    #[arg(long)]
    pub max: Option<u32>,

    /// Seed for reproducible lists
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ListArgs {
    /// Applies the overrides on top of a loaded config.
    #[instrument(skip(config))]
    pub fn apply(&self, config: CoachConfig) -> CoachConfig {
        let mut config = config;
        if let Some(len) = self.len {
            config = config.with_list_len(len);
        }
        if let Some(min) = self.min {
            config = config.with_min_value(min);
        }
        if let Some(max) = self.max {
            config = config.with_max_value(max);
        }
        debug!(?config, "Applied command-line overrides");
        config
    }
}
