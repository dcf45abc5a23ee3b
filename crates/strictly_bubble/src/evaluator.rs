//! Single-step decision evaluation.
//!
//! Each call judges one decision against the textbook bubble sort action
//! for the current pair. Correct decisions are applied and advance the
//! cursor; incorrect ones leave the array and cursor untouched so the
//! same pair is asked again.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::decision::{Decision, Verdict};
use crate::session::{Session, is_sorted};
use crate::snapshot::Snapshot;

/// Feedback returned when a finished session is asked for another step.
pub const ALREADY_COMPLETE: &str = "Sorting is already complete!";
/// Appended to the feedback of the step that sorts the array.
pub const SORTING_COMPLETE: &str = "Sorting complete! 🎉";

/// Result of one evaluator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    verdict: Verdict,
    snapshot: Snapshot,
}

impl StepOutcome {
    /// How the decision was scored.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Display values after the step.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Consumes the outcome, returning the display values.
    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }
}

impl Session {
    /// Applies the learner's decision for the current pair.
    ///
    /// A finished session is returned untouched: no step is counted and
    /// nothing is logged.
    #[instrument(skip(self), fields(pass = self.pass, inner = self.inner, steps = self.steps))]
    pub fn step(&mut self, decision: Decision) -> StepOutcome {
        if self.done {
            debug!("Step requested on finished session");
            return StepOutcome {
                verdict: Verdict::AlreadyComplete,
                snapshot: self.snapshot_with(ALREADY_COMPLETE.to_string(), None),
            };
        }

        let i = self.inner;
        let j = i + 1;
        let needed = Decision::for_pair(self.array[i], self.array[j]);

        let (verdict, mut feedback) = if decision == needed {
            if needed.swaps() {
                self.array.swap(i, j);
            }
            (Verdict::Correct, correct_feedback(decision, self.array[i], self.array[j]))
        } else {
            (Verdict::Incorrect, incorrect_feedback(decision, self.array[i], self.array[j]))
        };
        debug!(?decision, ?needed, %verdict, "Decision scored");

        if verdict == Verdict::Correct {
            self.inner += 1;
            if self.inner >= self.array.len() - self.pass - 1 {
                self.pass += 1;
                self.inner = 0;
                debug!(pass = self.pass, "Pass finished");
            }
        }

        if is_sorted(&self.array) {
            self.done = true;
            feedback.push('\n');
            feedback.push_str(SORTING_COMPLETE);
            info!(steps = self.steps + 1, "Sorting complete");
        }

        self.steps += 1;
        self.history
            .push(format!("Step {}: {} → {:?}", self.steps, feedback, self.array));
        self.feedback = feedback;

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        StepOutcome {
            verdict,
            snapshot: self.snapshot(),
        }
    }
}

/// Feedback for a decision that matched bubble sort.
///
/// `left` and `right` are the pair after any swap was applied.
fn correct_feedback(decision: Decision, left: u32, right: u32) -> String {
    match decision {
        Decision::Swap => format!(
            "Correct! {} was greater than {}, so swapping fixed the order.",
            right, left
        ),
        Decision::DontSwap => format!("Correct! {} ≤ {}, so no swap was needed.", left, right),
    }
}

/// Feedback for a decision that did not match bubble sort.
fn incorrect_feedback(decision: Decision, left: u32, right: u32) -> String {
    match decision {
        Decision::Swap => format!(
            "Incorrect. {} and {} are already in the right order.\n\
             Try again: swapping here would break the ascending order.",
            left, right
        ),
        Decision::DontSwap => format!(
            "Incorrect. {} is greater than {}, so leaving them would keep the array unsorted.\n\
             Try again: not swapping here would break the ascending order.",
            left, right
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_swap_feedback_names_larger_value() {
        let mut session = Session::from_values(vec![5, 3, 4]);
        let outcome = session.step(Decision::Swap);
        assert_eq!(outcome.verdict(), Verdict::Correct);
        assert_eq!(
            outcome.snapshot().feedback(),
            "Correct! 5 was greater than 3, so swapping fixed the order."
        );
        assert_eq!(session.array(), &[3, 5, 4]);
        assert_eq!(session.inner(), 1);
    }

    #[test]
    fn test_incorrect_dont_swap_holds_cursor() {
        let mut session = Session::from_values(vec![5, 3, 4]);
        let outcome = session.step(Decision::DontSwap);
        assert_eq!(outcome.verdict(), Verdict::Incorrect);
        assert!(outcome.snapshot().feedback().starts_with("Incorrect. 5 is greater than 3"));
        assert_eq!(session.array(), &[5, 3, 4]);
        assert_eq!((session.pass(), session.inner()), (0, 0));
        assert_eq!(session.steps(), 1);
    }

    #[test]
    fn test_incorrect_swap_explains_order() {
        let mut session = Session::from_values(vec![2, 4, 1]);
        let outcome = session.step(Decision::Swap);
        assert_eq!(
            outcome.snapshot().feedback(),
            "Incorrect. 2 and 4 are already in the right order.\n\
             Try again: swapping here would break the ascending order."
        );
    }

    #[test]
    fn test_pass_wraps_at_unsorted_prefix_end() {
        let mut session = Session::from_values(vec![3, 2, 1]);
        session.step(Decision::Swap); // [2, 3, 1]
        session.step(Decision::Swap); // [2, 1, 3]
        assert_eq!((session.pass(), session.inner()), (1, 0));
        let outcome = session.step(Decision::Swap); // [1, 2, 3]
        assert!(session.is_done());
        assert!(outcome.snapshot().feedback().ends_with(SORTING_COMPLETE));
        assert_eq!(outcome.snapshot().chart().highlight(), None);
    }

    #[test]
    fn test_history_line_format() {
        let mut session = Session::from_values(vec![1, 3, 2]);
        session.step(Decision::DontSwap);
        assert_eq!(
            session.history().last(),
            Some("Step 1: Correct! 1 ≤ 3, so no swap was needed. → [1, 3, 2]")
        );
    }
}
