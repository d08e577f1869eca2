//! Game rules: selection tracking and match resolution.
//!
//! - `SelectionTracker` collects up to `match_count` revealed dots per move
//! - `MatchEngine` evaluates a full selection, updates dot flags and
//!   detects the win
//!
//! Neither type schedules anything; timing belongs to the controller.

pub mod engine;
pub mod selection;

pub use engine::{MatchEngine, Outcome};
pub use selection::SelectionTracker;
