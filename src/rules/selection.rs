//! Selection tracking.
//!
//! The selection holds the dots revealed during the current move, up to
//! `match_count` of them. Once full it waits for a resolution and is then
//! cleared.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::entity::DotId;
use crate::core::error::Rejection;

/// Revealed-but-unresolved dots of the current move.
///
/// ## Invariants
///
/// - A dot appears at most once
/// - Size never exceeds `match_count`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTracker {
    match_count: usize,
    dots: SmallVec<[DotId; 5]>,
}

impl SelectionTracker {
    /// Create an empty selection for sets of `match_count`.
    #[must_use]
    pub fn new(match_count: usize) -> Self {
        Self {
            match_count,
            dots: SmallVec::new(),
        }
    }

    /// Reveal a dot and add it to the selection.
    ///
    /// Refuses, leaving everything unchanged, if the dot is not on the
    /// board, is matched, is already revealed, or the selection is full.
    pub fn select(&mut self, board: &mut Board, id: DotId) -> Result<(), Rejection> {
        let full = self.is_full();
        let dot = board.dot_mut(id).ok_or(Rejection::UnknownDot(id))?;
        if dot.matched {
            return Err(Rejection::AlreadyMatched(id));
        }
        if dot.revealed {
            return Err(Rejection::AlreadyRevealed(id));
        }
        if full {
            return Err(Rejection::SelectionFull);
        }

        dot.reveal();
        self.dots.push(id);
        Ok(())
    }

    /// Whether the selection holds `match_count` dots.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.dots.len() >= self.match_count
    }

    /// Empty the selection. Dot flags are left to the resolution.
    pub fn clear(&mut self) {
        self.dots.clear();
    }

    /// Selected dots in the order they were tapped.
    #[must_use]
    pub fn dots(&self) -> &[DotId] {
        &self.dots
    }

    /// Number of selected dots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Set size this selection fills up to.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.match_count
    }
}
