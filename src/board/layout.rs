//! The board: every card in one game plus an id lookup table.
//!
//! Cards live in an `im::Vector`, so cloning a board for a snapshot (an
//! observer, an undo buffer, a render thread) is O(1) and only the card a
//! mutation touches gets copied.
//!
//! Dots are addressed by [`DotId`] through a lookup table, or by position
//! via [`Board::dot_at`].

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::dot::{Card, Dot};
use crate::core::entity::DotId;

/// Position of a dot: card index on the board, slot index on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotSlot {
    pub card: usize,
    pub slot: usize,
}

/// All cards for one game.
///
/// Serializes as its card list; the lookup table is rebuilt on load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vector<Card>", into = "Vector<Card>")]
pub struct Board {
    cards: Vector<Card>,
    index: FxHashMap<DotId, DotSlot>,
}

impl Board {
    /// Build a board from cards.
    ///
    /// Dot ids must be unique; if one repeats, lookups find its first
    /// occurrence.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let mut index = FxHashMap::default();
        for (card_idx, card) in cards.iter().enumerate() {
            for (slot, dot) in card.dots.iter().enumerate() {
                index.entry(dot.id).or_insert(DotSlot { card: card_idx, slot });
            }
        }
        Self { cards, index }
    }

    /// Cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card at an index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Total dots across all cards.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.index.len()
    }

    /// Every dot, card by card.
    pub fn dots(&self) -> impl Iterator<Item = &Dot> {
        self.cards.iter().flat_map(|c| c.dots.iter())
    }

    /// Look up a dot by id.
    #[must_use]
    pub fn dot(&self, id: DotId) -> Option<&Dot> {
        let slot = self.index.get(&id)?;
        self.dot_at(slot.card, slot.slot)
    }

    /// Look up a dot by position.
    #[must_use]
    pub fn dot_at(&self, card: usize, slot: usize) -> Option<&Dot> {
        self.cards.get(card)?.dots.get(slot)
    }

    /// Where a dot sits on the board.
    #[must_use]
    pub fn locate(&self, id: DotId) -> Option<DotSlot> {
        self.index.get(&id).copied()
    }

    /// Whether the id names a dot on this board.
    #[must_use]
    pub fn contains(&self, id: DotId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of matched dots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.dots().filter(|d| d.matched).count()
    }

    pub(crate) fn dot_mut(&mut self, id: DotId) -> Option<&mut Dot> {
        let slot = *self.index.get(&id)?;
        self.cards.get_mut(slot.card)?.dots.get_mut(slot.slot)
    }
}

impl From<Vector<Card>> for Board {
    fn from(cards: Vector<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<Board> for Vector<Card> {
    fn from(board: Board) -> Self {
        board.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{CardId, SymbolId};

    fn board() -> Board {
        Board::from_cards(vec![
            Card::new(
                CardId::new(0),
                vec![
                    Dot::new(DotId::new(10), SymbolId::new(0)),
                    Dot::new(DotId::new(11), SymbolId::new(1)),
                ],
            ),
            Card::new(CardId::new(1), vec![Dot::new(DotId::new(12), SymbolId::new(0))]),
        ])
    }

    #[test]
    fn test_lookup() {
        let board = board();
        assert_eq!(board.card_count(), 2);
        assert_eq!(board.dot_count(), 3);
        assert_eq!(board.dot(DotId::new(11)).map(|d| d.symbol), Some(SymbolId::new(1)));
        assert_eq!(board.locate(DotId::new(12)), Some(DotSlot { card: 1, slot: 0 }));
        assert!(board.dot(DotId::new(99)).is_none());
        assert!(!board.contains(DotId::new(99)));
    }

    #[test]
    fn test_dot_at() {
        let board = board();
        assert_eq!(board.dot_at(0, 1).map(|d| d.id), Some(DotId::new(11)));
        assert!(board.dot_at(1, 1).is_none());
        assert!(board.dot_at(5, 0).is_none());
    }

    #[test]
    fn test_mutation_through_index() {
        let mut board = board();
        board.dot_mut(DotId::new(12)).unwrap().reveal();
        assert!(board.dot(DotId::new(12)).unwrap().revealed);
        assert!(!board.dot(DotId::new(10)).unwrap().revealed);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = board();
        let snapshot = board.clone();

        board.dot_mut(DotId::new(10)).unwrap().reveal();
        board.dot_mut(DotId::new(10)).unwrap().mark_matched();

        assert_eq!(board.matched_count(), 1);
        assert_eq!(snapshot.matched_count(), 0);
    }

    #[test]
    fn test_serialization_rebuilds_index() {
        let board = board();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.dot_count(), 3);
        assert_eq!(restored.locate(DotId::new(11)), Some(DotSlot { card: 0, slot: 1 }));
        assert!(restored.cards().eq(board.cards()));
    }
}
