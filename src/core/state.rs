//! Game state for one game instance.
//!
//! `GameState` owns the board, the in-progress selection and the move
//! counter. It is created by the controller on every new game and replaced
//! wholesale on reset.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::entity::DotId;
use super::error::Rejection;
use crate::board::Board;
use crate::rules::{MatchEngine, Outcome, SelectionTracker};

/// Lifecycle phase of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GamePhase {
    /// No board has been generated yet.
    #[display("idle")]
    Idle,
    /// Accepting taps.
    #[display("ready")]
    Ready,
    /// Selection is full; a resolution is scheduled.
    #[display("awaiting resolution")]
    AwaitingResolution,
    /// Every set has been found. Terminal until reset.
    #[display("won")]
    Won,
}

/// Matched sets versus sets on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub matched_sets: usize,
    pub total_sets: usize,
}

impl Progress {
    /// Completed share in `0.0..=1.0`. An empty board counts as complete.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_sets == 0 {
            return 1.0;
        }
        self.matched_sets as f64 / self.total_sets as f64
    }
}

/// Mutable state of a single game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: BoardConfig,
    board: Board,
    selection: SelectionTracker,
    moves: u32,
    won: bool,
    board_seed: u64,
}

impl GameState {
    /// Create a fresh state around a generated board.
    ///
    /// `board_seed` is the seed the board was shuffled with.
    #[must_use]
    pub fn new(config: BoardConfig, board: Board, board_seed: u64) -> Self {
        Self {
            config,
            board,
            selection: SelectionTracker::new(config.match_count),
            moves: 0,
            won: false,
            board_seed,
        }
    }

    /// Configuration the board was generated from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Completed selections so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether every set has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Seed that reproduces this board's layout.
    #[must_use]
    pub fn board_seed(&self) -> u64 {
        self.board_seed
    }

    /// Matched sets against total sets.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            matched_sets: MatchEngine::count_matched_sets(&self.board, self.config.match_count),
            total_sets: MatchEngine::count_total_sets(&self.config),
        }
    }

    /// Add a dot to the selection. Returns `true` when the selection became
    /// full, which counts as one move.
    pub fn select(&mut self, dot: DotId) -> Result<bool, Rejection> {
        self.selection.select(&mut self.board, dot)?;
        if self.selection.is_full() {
            self.moves += 1;
            return Ok(true);
        }
        Ok(false)
    }

    /// Evaluate the selection, apply the outcome and clear it.
    ///
    /// Updates the won flag. Returns the outcome and the dots it applied to.
    pub fn resolve(&mut self) -> (Outcome, Vec<DotId>) {
        let dots = self.selection.dots().to_vec();
        let outcome = MatchEngine::resolve(&dots, &mut self.board);
        self.selection.clear();
        if outcome == Outcome::Matched && MatchEngine::is_game_won(&self.board) {
            self.won = true;
        }
        (outcome, dots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Card, Dot};
    use crate::core::{CardId, SymbolId};

    /// Two cards: [A, B] and [B, A].
    fn small_state() -> GameState {
        let board = Board::from_cards(vec![
            Card::new(
                CardId::new(0),
                vec![
                    Dot::new(DotId::new(0), SymbolId::new(0)),
                    Dot::new(DotId::new(1), SymbolId::new(1)),
                ],
            ),
            Card::new(
                CardId::new(1),
                vec![
                    Dot::new(DotId::new(2), SymbolId::new(1)),
                    Dot::new(DotId::new(3), SymbolId::new(0)),
                ],
            ),
        ]);
        GameState::new(BoardConfig::new(2, 2, 2), board, 7)
    }

    #[test]
    fn test_new_state() {
        let state = small_state();
        assert_eq!(state.moves(), 0);
        assert!(!state.is_won());
        assert!(state.selection().is_empty());
        assert_eq!(state.board_seed(), 7);
        assert_eq!(state.progress(), Progress { matched_sets: 0, total_sets: 2 });
    }

    #[test]
    fn test_select_counts_move_when_full() {
        let mut state = small_state();
        assert_eq!(state.select(DotId::new(0)), Ok(false));
        assert_eq!(state.moves(), 0);
        assert_eq!(state.select(DotId::new(3)), Ok(true));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_resolve_to_win() {
        let mut state = small_state();
        state.select(DotId::new(0)).unwrap();
        state.select(DotId::new(3)).unwrap();
        let (outcome, dots) = state.resolve();
        assert_eq!(outcome, Outcome::Matched);
        assert_eq!(dots, vec![DotId::new(0), DotId::new(3)]);
        assert!(!state.is_won());
        assert!(state.selection().is_empty());

        state.select(DotId::new(1)).unwrap();
        state.select(DotId::new(2)).unwrap();
        state.resolve();
        assert!(state.is_won());
        assert_eq!(state.moves(), 2);
        assert_eq!(state.progress().fraction(), 1.0);
    }

    #[test]
    fn test_progress_fraction() {
        let progress = Progress { matched_sets: 3, total_sets: 9 };
        assert!((progress.fraction() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(Progress::default().fraction(), 1.0);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GamePhase::AwaitingResolution.to_string(), "awaiting resolution");
        assert_eq!(GamePhase::Idle.to_string(), "idle");
    }
}
