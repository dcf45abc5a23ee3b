//! Strictly Bubble - bubble sort coaching logic
//!
//! A learner is shown two adjacent elements at a time and decides whether
//! they should be swapped. Every decision is scored against textbook bubble
//! sort; correct ones are applied, incorrect ones are explained and the
//! same pair is asked again.
//!
//! # Architecture
//!
//! - **Session**: array, pass/inner cursor, completion flag, step counter
//!   and an append-only history
//! - **Evaluator**: [`Session::step`] judges one [`Decision`]
//! - **Auto-play**: [`AutoPlay`] yields one [`Snapshot`] per comparison
//! - **Chart**: renderer-agnostic bar model with the active pair marked
//!
//! # Example
//!
//! ```
//! use strictly_bubble::{Decision, Session, Verdict};
//!
//! let mut session = Session::from_values(vec![5, 3, 4, 1]);
//! let outcome = session.step(Decision::Swap);
//! assert_eq!(outcome.verdict(), Verdict::Correct);
//! assert_eq!(session.array(), &[3, 5, 4, 1]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod chart;
pub mod commands;
mod decision;
mod evaluator;
mod generator;
mod history;
pub mod invariants;
mod session;
mod snapshot;

pub use autoplay::{AUTO_SORT_COMPLETE, AutoPlay};
pub use chart::{BarRole, CHART_TITLE, Chart, ChartBar, Highlight};
pub use commands::Command;
pub use decision::{Decision, Verdict};
pub use evaluator::{ALREADY_COMPLETE, SORTING_COMPLETE, StepOutcome};
pub use generator::{
    DEFAULT_LEN, DEFAULT_MAX, DEFAULT_MIN, GenerateError, ListSpec, generate_values,
};
pub use history::History;
pub use invariants::{InvariantSet, InvariantViolation, SessionInvariants};
pub use session::{Session, is_sorted};
pub use snapshot::Snapshot;
