//! Command handlers for the four coach actions.
//!
//! Each handler takes the previous state by value and hands back the next
//! state with its display values. Front ends keep no hidden state of
//! their own beyond the value they were last given.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::autoplay::AutoPlay;
use crate::decision::Decision;
use crate::evaluator::StepOutcome;
use crate::generator::{GenerateError, ListSpec};
use crate::session::Session;
use crate::snapshot::Snapshot;

/// An action a front end can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Replace the session with a new random list.
    Generate,
    /// Judge a decision for the current pair.
    Decide(Decision),
    /// Play the rest of the sort automatically.
    AutoSort,
}

/// Generates a new list, discarding any previous session.
#[instrument(skip(rng))]
pub fn generate<R: Rng + ?Sized>(
    spec: ListSpec,
    rng: &mut R,
) -> Result<(Session, Snapshot), GenerateError> {
    let session = Session::generate(spec, rng)?;
    let snapshot = session.snapshot();
    Ok((session, snapshot))
}

/// Applies a Swap / Don't Swap decision.
#[instrument(skip(session))]
pub fn decide(mut session: Session, decision: Decision) -> (Session, StepOutcome) {
    let outcome = session.step(decision);
    (session, outcome)
}

/// Starts auto-play; pull snapshots from the returned sequence.
#[instrument(skip(session))]
pub fn auto_sort(session: Session) -> AutoPlay {
    AutoPlay::new(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Verdict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_returns_opening_snapshot() {
        let mut rng = StdRng::seed_from_u64(3);
        let (session, first) = generate(ListSpec::new(4, 1, 9), &mut rng).unwrap();
        assert_eq!(first.steps_text(), "Steps: 0");
        assert_eq!(first.array(), session.array());
        assert_eq!(first.history_text(), session.history().text());
    }

    #[test]
    fn test_handlers_thread_state() {
        let session = Session::from_values(vec![6, 2, 8, 4]);
        let (session, outcome) = decide(session, Decision::Swap);
        assert_eq!(outcome.verdict(), Verdict::Correct);
        assert_eq!(session.steps(), 1);

        let last = auto_sort(session).last().unwrap();
        assert_eq!(last.array(), &[2, 4, 6, 8]);
        assert_eq!(last.chart().highlight(), None);
    }
}
