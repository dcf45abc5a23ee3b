//! Point-in-time display values.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;

/// Everything a front end needs to show after one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) array: Vec<u32>,
    pub(crate) feedback: String,
    pub(crate) chart: Chart,
    pub(crate) steps: u32,
    pub(crate) history: String,
}

impl Snapshot {
    /// The array at this point.
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// Single-line (occasionally two-line) feedback text.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Chart of the array with the active pair highlighted.
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Step counter value.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Step counter as display text, e.g. `Steps: 3`.
    pub fn steps_text(&self) -> String {
        format!("Steps: {}", self.steps)
    }

    /// Full history, one event per line.
    pub fn history_text(&self) -> &str {
        &self.history
    }
}
