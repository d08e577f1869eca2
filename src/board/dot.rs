//! Dots and cards - the pieces a board is made of.
//!
//! A `Dot` is one hidden symbol. Its three flags move through a small
//! lifecycle:
//!
//! | state          | revealed | selected | matched |
//! |----------------|----------|----------|---------|
//! | hidden         | false    | false    | false   |
//! | selected       | true     | true     | false   |
//! | matched        | true     | false    | true    |
//!
//! A `Card` is an ordered group of dots. Order is positional only; it has
//! no meaning for matching.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, DotId, SymbolId};

/// One cell on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dot {
    /// Unique id, stable for the dot's lifetime.
    pub id: DotId,

    /// Symbol hidden under this dot.
    pub symbol: SymbolId,

    /// Face-up (selected or matched).
    pub revealed: bool,

    /// Part of a completed set. Permanent until the board is replaced.
    pub matched: bool,

    /// In the current, unresolved selection.
    pub selected: bool,
}

impl Dot {
    /// Create a hidden dot.
    #[must_use]
    pub fn new(id: DotId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
            selected: false,
        }
    }

    /// Neither revealed nor matched: the only state a tap can act on.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.revealed && !self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
        self.selected = true;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.selected = false;
    }

    pub(crate) fn hide(&mut self) {
        self.revealed = false;
        self.selected = false;
    }
}

/// An ordered group of dots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id.
    pub id: CardId,

    /// Dots in display order. May hold fewer than `dots_per_card` when the
    /// board's dot count is not a multiple of the match count.
    pub dots: Vec<Dot>,
}

impl Card {
    /// Create a card from its dots.
    #[must_use]
    pub fn new(id: CardId, dots: Vec<Dot>) -> Self {
        Self { id, dots }
    }

    /// Number of dots on this card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Whether the card holds no dots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Whether every dot on the card is matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.dots.iter().all(|d| d.matched)
    }
}
