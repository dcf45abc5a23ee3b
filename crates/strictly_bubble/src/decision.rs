//! First-class decision types for the bubble sort coach.
//!
//! A decision is the learner's intent at one comparison. It is judged
//! against the comparison's ground truth before anything is applied.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::instrument;

/// The learner's choice for the pair currently under comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Decision {
    /// Exchange the two elements.
    #[strum(serialize = "Swap")]
    Swap,
    /// Leave the two elements where they are.
    #[strum(serialize = "Don't Swap")]
    DontSwap,
}

impl Decision {
    /// Returns the decision textbook bubble sort makes for a pair.
    #[instrument]
    pub fn for_pair(left: u32, right: u32) -> Self {
        if left > right {
            Self::Swap
        } else {
            Self::DontSwap
        }
    }

    /// Returns true if this decision exchanges the pair.
    pub fn swaps(self) -> bool {
        matches!(self, Self::Swap)
    }
}

/// How a single evaluator call was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Verdict {
    /// The decision matched bubble sort; the cursor advanced.
    Correct,
    /// The decision did not match; the same pair is presented again.
    Incorrect,
    /// The session had already finished; nothing changed.
    #[strum(serialize = "Already complete")]
    AlreadyComplete,
}
