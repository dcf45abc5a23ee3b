//! First-class invariants for a coaching session.
//!
//! Invariants are properties that hold after every state transition.
//! They are checked in debug builds and can be tested independently.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

use crate::session::{Session, is_sorted};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: while unfinished, the cursor names a pair inside the unsorted prefix.
pub struct CursorInBounds;

impl Invariant<Session> for CursorInBounds {
    fn holds(session: &Session) -> bool {
        session.done || session.pass + session.inner + 1 < session.array.len()
    }

    fn description() -> &'static str {
        "Cursor stays inside the unsorted prefix while sorting"
    }
}

/// Invariant: a finished session holds a sorted array.
pub struct DoneMeansSorted;

impl Invariant<Session> for DoneMeansSorted {
    fn holds(session: &Session) -> bool {
        !session.done || is_sorted(&session.array)
    }

    fn description() -> &'static str {
        "A finished session holds a sorted array"
    }
}

/// Invariant: every counted step left a history line, plus the opening line.
pub struct HistoryCoversSteps;

impl Invariant<Session> for HistoryCoversSteps {
    fn holds(session: &Session) -> bool {
        session.history.len() > session.steps as usize
    }

    fn description() -> &'static str {
        "History has one line per step plus the opening line"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (CursorInBounds, DoneMeansSorted, HistoryCoversSteps);

/// Asserts that all session invariants hold (debug builds only).
#[instrument(skip(session))]
pub fn assert_invariants(session: &Session) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            warn!(%violation, "Session invariant failed");
        }
        debug_assert!(false, "Session invariants violated: {:?}", violations);
    }
}
