//! Auto-play: textbook bubble sort, one comparison per snapshot.
//!
//! [`AutoPlay`] is a pull-based sequence. It never sleeps; the caller
//! decides how long to show each snapshot and may stop pulling at any
//! time, recovering the session with [`AutoPlay::into_session`].

use std::iter::FusedIterator;

use tracing::{debug, info, instrument};

use crate::chart::Highlight;
use crate::session::{Session, is_sorted};
use crate::snapshot::Snapshot;

/// Feedback of the final auto-play snapshot.
pub const AUTO_SORT_COMPLETE: &str = "Auto sort complete! 🎉";

/// Where the sequencer is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Comparing pairs.
    Comparing,
    /// All passes done; the completion snapshot is next.
    Finishing,
    /// Completion snapshot emitted.
    Exhausted,
}

/// Lazy, finite, non-restartable sequence of auto-play snapshots.
///
/// Runs every pass `p` in `0..len-1` and every inner index in
/// `0..len-p-1` over the session's current array, regardless of where
/// an interactive run left its cursor. Step numbering continues from the
/// session's counter.
#[derive(Debug)]
pub struct AutoPlay {
    session: Session,
    pass: usize,
    inner: usize,
    phase: Phase,
    compared: usize,
}

impl AutoPlay {
    /// Takes ownership of the session and prepares a full run.
    #[instrument(skip(session), fields(len = session.array.len(), steps = session.steps))]
    pub fn new(session: Session) -> Self {
        info!("Auto sort started");
        let phase = if session.array.len() < 2 {
            Phase::Finishing
        } else {
            Phase::Comparing
        };
        Self {
            session,
            pass: 0,
            inner: 0,
            phase,
            compared: 0,
        }
    }

    /// Returns the session as of the last snapshot.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns true once the completion snapshot has been produced.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Stops the run and returns the session.
    ///
    /// If the run was interrupted, the session's cursor points at the next
    /// comparison auto-play would have made, so interactive stepping can
    /// take over from there. A run interrupted after the array is already
    /// sorted is finished first, unless no comparison ran on a session
    /// that was already done.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn into_session(mut self) -> Session {
        if self.phase != Phase::Exhausted {
            info!(steps = self.session.steps, "Auto sort interrupted");
            let untouched = self.compared == 0 && self.session.done;
            let settled = self.phase == Phase::Finishing || is_sorted(&self.session.array);
            if settled && !untouched {
                self.finish();
            }
        }
        self.session
    }

    /// Performs one comparison and advances the cursor.
    fn compare(&mut self) -> Snapshot {
        let i = self.inner;
        let j = i + 1;
        let array = &mut self.session.array;

        let feedback = if array[i] > array[j] {
            array.swap(i, j);
            format!("Swapped {} and {}", array[i], array[j])
        } else {
            format!("No swap needed for {} and {}", array[i], array[j])
        };

        self.session.steps += 1;
        self.compared += 1;
        self.session.history.push(format!(
            "Step {}: {} → {:?}",
            self.session.steps, feedback, self.session.array
        ));
        debug!(pass = self.pass, inner = i, %feedback, "Auto comparison");

        self.inner += 1;
        if self.inner >= self.session.array.len() - self.pass - 1 {
            self.pass += 1;
            self.inner = 0;
            if self.pass + 1 >= self.session.array.len() {
                self.phase = Phase::Finishing;
            }
        }
        self.session.pass = self.pass;
        self.session.inner = self.inner;
        self.session.feedback = feedback.clone();

        self.session.snapshot_with(feedback, Some(Highlight::new(i, j)))
    }

    /// Marks the session finished and logs completion.
    fn finish(&mut self) -> Snapshot {
        self.session.done = true;
        self.session.feedback = AUTO_SORT_COMPLETE.to_string();
        self.session.history.push(format!(
            "Step {}: {}",
            self.session.steps, AUTO_SORT_COMPLETE
        ));
        self.phase = Phase::Exhausted;
        info!(steps = self.session.steps, "Auto sort complete");

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(&self.session);

        self.session.snapshot()
    }
}

impl Iterator for AutoPlay {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        match self.phase {
            Phase::Comparing => Some(self.compare()),
            Phase::Finishing => Some(self.finish()),
            Phase::Exhausted => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.phase {
            Phase::Exhausted => 0,
            Phase::Finishing => 1,
            Phase::Comparing => {
                let n = self.session.array.len();
                // Comparisons left in this pass, then in the later passes.
                let this_pass = n - self.pass - 1 - self.inner;
                let later: usize = (self.pass + 1..n - 1).map(|p| n - p - 1).sum();
                this_pass + later + 1
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AutoPlay {}

impl FusedIterator for AutoPlay {}
