//! Randomized board generation.
//!
//! ## Algorithm
//!
//! 1. `total = number_of_cards * dots_per_card`
//! 2. `sets = total / match_count` (floor)
//! 3. Set `i` takes symbol `pool[i mod pool.len()]` and emits `match_count`
//!    dots carrying it
//! 4. Shuffle the flat dot list uniformly
//! 5. Deal it into `number_of_cards` cards of `dots_per_card` in order
//!
//! When `total` is not a multiple of `match_count` the remainder slots are
//! left empty, so the last card(s) come out short. Cards are never padded
//! and no partial set is ever created.

use tracing::debug;

use super::dot::{Card, Dot};
use super::layout::Board;
use crate::core::config::{BoardConfig, SymbolPool};
use crate::core::entity::{CardId, DotId};
use crate::core::rng::GameRng;

/// Builds boards and allocates their ids.
///
/// Id counters persist across calls, so boards produced by the same
/// generator never share a dot or card id.
///
/// ## Example
///
/// ```
/// use memory_match::board::BoardGenerator;
/// use memory_match::core::{BoardConfig, GameRng, SymbolPool};
///
/// let mut generator = BoardGenerator::new();
/// let mut rng = GameRng::new(42);
/// let board = generator.generate(&BoardConfig::new(3, 9, 3), &SymbolPool::default(), &mut rng);
///
/// assert_eq!(board.card_count(), 3);
/// assert_eq!(board.dot_count(), 27);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardGenerator {
    next_dot_id: u32,
    next_card_id: u32,
}

impl BoardGenerator {
    /// Create a generator with fresh id counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a shuffled board.
    ///
    /// Deterministic for a given RNG state. A configuration with a zero
    /// match count produces cards with no dots.
    pub fn generate(&mut self, config: &BoardConfig, pool: &SymbolPool, rng: &mut GameRng) -> Board {
        let total_dots = config.total_dots();
        let sets = config.total_sets();

        let mut dots = Vec::with_capacity(sets * config.match_count);
        for set in 0..sets {
            let symbol = pool.symbol_for_set(set);
            for _ in 0..config.match_count {
                dots.push(Dot::new(self.alloc_dot(), symbol));
            }
        }

        rng.shuffle(&mut dots);

        let dropped = total_dots - dots.len();
        let mut remaining = dots.into_iter();
        let cards: Vec<Card> = (0..config.number_of_cards)
            .map(|_| {
                let card_dots: Vec<Dot> = remaining.by_ref().take(config.dots_per_card).collect();
                Card::new(self.alloc_card(), card_dots)
            })
            .collect();

        debug!(
            cards = config.number_of_cards,
            sets,
            dropped,
            symbols_reused = sets > pool.len(),
            "Generated board"
        );

        Board::from_cards(cards)
    }

    fn alloc_dot(&mut self) -> DotId {
        let id = DotId(self.next_dot_id);
        self.next_dot_id = self.next_dot_id.wrapping_add(1);
        id
    }

    fn alloc_card(&mut self) -> CardId {
        let id = CardId(self.next_card_id);
        self.next_card_id = self.next_card_id.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::SymbolId;
    use rustc_hash::FxHashMap;

    fn symbol_counts(board: &Board) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for dot in board.dots() {
            *counts.entry(dot.symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_default_board() {
        let mut generator = BoardGenerator::new();
        let board = generator.generate(&BoardConfig::default(), &SymbolPool::default(), &mut GameRng::new(1));

        assert_eq!(board.card_count(), 2);
        assert!(board.cards().all(|c| c.len() == 9));
        let counts = symbol_counts(&board);
        assert_eq!(counts.len(), 9);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_all_dots_start_hidden() {
        let mut generator = BoardGenerator::new();
        let board = generator.generate(&BoardConfig::new(3, 9, 3), &SymbolPool::default(), &mut GameRng::new(1));
        assert!(board.dots().all(Dot::is_hidden));
        assert!(board.dots().all(|d| !d.selected));
    }

    #[test]
    fn test_remainder_dropped() {
        // 3 cards * 5 dots = 15 slots, sets of 4: 3 sets, 3 slots dropped
        let mut generator = BoardGenerator::new();
        let board = generator.generate(&BoardConfig::new(4, 5, 3), &SymbolPool::default(), &mut GameRng::new(9));

        assert_eq!(board.card_count(), 3);
        assert_eq!(board.dot_count(), 12);
        let sizes: Vec<usize> = board.cards().map(Card::len).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
    }

    #[test]
    fn test_trailing_cards_can_be_empty() {
        // 7 cards of 1 dot, sets of 5: one set, last two cards empty
        let mut generator = BoardGenerator::new();
        let board = generator.generate(&BoardConfig::new(5, 1, 7), &SymbolPool::default(), &mut GameRng::new(3));

        let sizes: Vec<usize> = board.cards().map(Card::len).collect();
        assert_eq!(sizes, vec![1, 1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_pool_wraps() {
        let pool = SymbolPool::new(["a", "b"]).unwrap();
        let mut generator = BoardGenerator::new();
        // 12 dots, 6 pairs over 2 symbols
        let board = generator.generate(&BoardConfig::new(2, 6, 2), &pool, &mut GameRng::new(5));

        let counts = symbol_counts(&board);
        assert_eq!(counts.get(&SymbolId::new(0)), Some(&6));
        assert_eq!(counts.get(&SymbolId::new(1)), Some(&6));
    }

    #[test]
    fn test_deterministic_layout() {
        let config = BoardConfig::new(3, 4, 6);
        let pool = SymbolPool::default();

        let a = BoardGenerator::new().generate(&config, &pool, &mut GameRng::new(77));
        let b = BoardGenerator::new().generate(&config, &pool, &mut GameRng::new(77));

        assert!(a.cards().eq(b.cards()));
    }

    #[test]
    fn test_ids_unique_across_boards() {
        let mut generator = BoardGenerator::new();
        let config = BoardConfig::default();
        let pool = SymbolPool::default();
        let mut rng = GameRng::new(0);

        let first = generator.generate(&config, &pool, &mut rng);
        let second = generator.generate(&config, &pool, &mut rng);

        assert!(first.dots().all(|d| !second.contains(d.id)));
        assert!(first.cards().all(|c| second.cards().all(|o| o.id != c.id)));
    }

    #[test]
    fn test_zero_match_count_does_not_panic() {
        let mut generator = BoardGenerator::new();
        let board = generator.generate(&BoardConfig::new(0, 3, 2), &SymbolPool::default(), &mut GameRng::new(0));
        assert_eq!(board.card_count(), 2);
        assert_eq!(board.dot_count(), 0);
    }
}
