//! Session state tracker.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::chart::{Chart, Highlight};
use crate::generator::{GenerateError, ListSpec, generate_values};
use crate::history::History;
use crate::snapshot::Snapshot;

/// Returns true if every adjacent pair is non-decreasing.
pub fn is_sorted(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Complete state of one coaching session.
///
/// Only the evaluator ([`Session::step`]), the constructors and the
/// [`AutoPlay`](crate::AutoPlay) sequencer mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) array: Vec<u32>,
    pub(crate) pass: usize,
    pub(crate) inner: usize,
    pub(crate) done: bool,
    pub(crate) steps: u32,
    pub(crate) history: History,
    pub(crate) feedback: String,
}

impl Session {
    /// Starts a session over the given list.
    ///
    /// Lists with fewer than two elements, and lists that are already
    /// sorted, start out finished.
    #[instrument]
    pub fn from_values(values: Vec<u32>) -> Self {
        let mut feedback = format!("New list generated: {:?}", values);
        let done = is_sorted(&values);
        if done && values.len() > 1 {
            feedback.push_str("\nList is already sorted.");
        }

        let mut history = History::new();
        history.push(format!("Step 0: {}", feedback));

        info!(len = values.len(), done, "Session started");
        Self {
            array: values,
            pass: 0,
            inner: 0,
            done,
            steps: 0,
            history,
            feedback,
        }
    }

    /// Starts a session over a freshly generated random list.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(spec: ListSpec, rng: &mut R) -> Result<Self, GenerateError> {
        Ok(Self::from_values(generate_values(spec, rng)?))
    }

    /// Returns the current array.
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// Returns the number of completed passes.
    pub fn pass(&self) -> usize {
        self.pass
    }

    /// Returns the position compared against its successor.
    pub fn inner(&self) -> usize {
        self.inner
    }

    /// Returns true once the array is sorted.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the number of counted steps.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Returns the step log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the most recent feedback text.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Returns the pair awaiting a decision, or `None` once finished.
    pub fn highlight(&self) -> Option<Highlight> {
        if self.done || self.array.len() < 2 {
            None
        } else {
            Some(Highlight::pair_at(self.inner))
        }
    }

    /// Returns the values of the pair awaiting a decision.
    pub fn current_pair(&self) -> Option<(u32, u32)> {
        let h = self.highlight()?;
        Some((*self.array.get(h.first)?, *self.array.get(h.second)?))
    }

    /// Returns the display values for the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_with(self.feedback.clone(), self.highlight())
    }

    /// Snapshot carrying a specific feedback text and highlight.
    pub(crate) fn snapshot_with(&self, feedback: String, highlight: Option<Highlight>) -> Snapshot {
        Snapshot {
            array: self.array.clone(),
            feedback,
            chart: Chart::new(&self.array, highlight),
            steps: self.steps,
            history: self.history.text(),
        }
    }
}
