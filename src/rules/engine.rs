//! Match evaluation and win detection.
//!
//! A full selection is *matched* when every dot carries the same symbol as
//! the first one. Matched dots stay face-up for the rest of the game;
//! mismatched dots are hidden again.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::config::BoardConfig;
use crate::core::entity::DotId;

/// Result of resolving a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// All selected dots share a symbol.
    Matched,
    /// At least one selected dot differs.
    NotMatched,
}

impl Outcome {
    /// Whether this is a match.
    #[must_use]
    pub fn is_match(self) -> bool {
        self == Outcome::Matched
    }
}

/// Stateless match rules. Side effects are limited to dot flags.
pub struct MatchEngine;

impl MatchEngine {
    /// Evaluate a selection and apply the result to the board.
    ///
    /// - `Matched`: every selected dot becomes matched and unselected,
    ///   staying revealed
    /// - `NotMatched`: every selected dot is hidden and unselected
    ///
    /// A single-dot selection always matches. An empty selection is
    /// `NotMatched` and changes nothing. Ids not on the board are skipped.
    pub fn resolve(selection: &[DotId], board: &mut Board) -> Outcome {
        let outcome = Self::evaluate(selection, board);
        for &id in selection {
            if let Some(dot) = board.dot_mut(id) {
                match outcome {
                    Outcome::Matched => dot.mark_matched(),
                    Outcome::NotMatched => dot.hide(),
                }
            }
        }
        outcome
    }

    /// Decide the outcome without touching the board.
    #[must_use]
    pub fn evaluate(selection: &[DotId], board: &Board) -> Outcome {
        let mut symbols = selection.iter().map(|&id| board.dot(id).map(|d| d.symbol));
        let first = match symbols.next() {
            Some(Some(symbol)) => symbol,
            _ => return Outcome::NotMatched,
        };
        if symbols.all(|s| s == Some(first)) {
            Outcome::Matched
        } else {
            Outcome::NotMatched
        }
    }

    /// Whether every dot on the board is matched. A board with no dots
    /// has nothing to win.
    #[must_use]
    pub fn is_game_won(board: &Board) -> bool {
        board.dot_count() > 0 && board.dots().all(|d| d.matched)
    }

    /// Completed sets: matched dots divided by the set size.
    #[must_use]
    pub fn count_matched_sets(board: &Board, match_count: usize) -> usize {
        board.matched_count().checked_div(match_count).unwrap_or(0)
    }

    /// Sets a board generated from `config` holds.
    #[must_use]
    pub fn count_total_sets(config: &BoardConfig) -> usize {
        config.total_sets()
    }
}
