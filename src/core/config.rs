//! Board configuration.
//!
//! Players choose three numbers:
//! - `match_count`: how many identical symbols form a set
//! - `dots_per_card`: how many dots each card holds
//! - `number_of_cards`: how many cards are in play
//!
//! `BoardConfig` derives the legal card range from the first two and flags
//! configurations outside it as invalid. It never clamps on its own; the
//! editing setters call [`BoardConfig::validate_and_adjust`] for you.
//!
//! The symbol images themselves are supplied by the presentation layer as a
//! [`SymbolPool`].

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::entity::SymbolId;
use super::error::GameError;

/// Practical ceiling on the number of cards in one game.
pub const MAX_CARDS: usize = 48;

/// Most dot slots a single board may have.
pub const MAX_BOARD_DOTS: usize = 1 << 16;

/// Most names a [`SymbolPool`] can hold, one per `SymbolId`.
pub const MAX_SYMBOLS: usize = u16::MAX as usize + 1;

/// Bounds a settings editor should offer for `match_count`.
pub const MATCH_COUNT_RANGE: RangeInclusive<usize> = 2..=5;

/// Bounds a settings editor should offer for `dots_per_card`.
pub const DOTS_PER_CARD_RANGE: RangeInclusive<usize> = 2..=9;

/// Build a configuration from the three player-chosen parameters.
///
/// No clamping happens here; check [`BoardConfig::is_valid`].
#[must_use]
pub fn configure(match_count: usize, dots_per_card: usize, number_of_cards: usize) -> BoardConfig {
    BoardConfig::new(match_count, dots_per_card, number_of_cards)
}

/// Board geometry chosen by the player.
///
/// ## Example
///
/// ```
/// use memory_match::core::BoardConfig;
///
/// let mut config = BoardConfig::new(2, 2, 1);
/// assert_eq!(config.minimum_cards(), 2);
/// assert!(!config.is_valid());
///
/// config.validate_and_adjust();
/// assert_eq!(config.number_of_cards, 2);
/// assert!(config.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Symbols required per set.
    pub match_count: usize,

    /// Capacity of a single card.
    pub dots_per_card: usize,

    /// Total cards in play.
    pub number_of_cards: usize,
}

impl Default for BoardConfig {
    /// Pairs on two 3x3 cards.
    fn default() -> Self {
        Self {
            match_count: 2,
            dots_per_card: 9,
            number_of_cards: 2,
        }
    }
}

impl BoardConfig {
    /// Create a configuration without any adjustment.
    #[must_use]
    pub const fn new(match_count: usize, dots_per_card: usize, number_of_cards: usize) -> Self {
        Self {
            match_count,
            dots_per_card,
            number_of_cards,
        }
    }

    /// Set the match count.
    #[must_use]
    pub fn with_match_count(mut self, match_count: usize) -> Self {
        self.match_count = match_count;
        self
    }

    /// Set dots per card.
    #[must_use]
    pub fn with_dots_per_card(mut self, dots_per_card: usize) -> Self {
        self.dots_per_card = dots_per_card;
        self
    }

    /// Set the number of cards.
    #[must_use]
    pub fn with_number_of_cards(mut self, number_of_cards: usize) -> Self {
        self.number_of_cards = number_of_cards;
        self
    }

    /// Edit the match count, then pull `number_of_cards` back into range.
    pub fn set_match_count(&mut self, match_count: usize) {
        self.match_count = match_count;
        self.validate_and_adjust();
    }

    /// Edit dots per card, then pull `number_of_cards` back into range.
    pub fn set_dots_per_card(&mut self, dots_per_card: usize) {
        self.dots_per_card = dots_per_card;
        self.validate_and_adjust();
    }

    /// Edit the number of cards. Out-of-range values are kept and flagged
    /// by [`is_valid`](Self::is_valid).
    pub fn set_number_of_cards(&mut self, number_of_cards: usize) {
        self.number_of_cards = number_of_cards;
    }

    /// Fewest cards that can hold a playable board.
    ///
    /// When a set is larger than a card, each card contributes at most one
    /// dot per set, so at least `match_count` cards are needed. Otherwise
    /// there must be room for two full sets, and never fewer than two cards.
    #[must_use]
    pub fn minimum_cards(&self) -> usize {
        if self.match_count > self.dots_per_card {
            return self.match_count;
        }
        let needed = self.match_count.saturating_mul(2).div_ceil(self.dots_per_card.max(1));
        needed.max(2)
    }

    /// Most cards allowed; never below [`minimum_cards`](Self::minimum_cards).
    #[must_use]
    pub fn maximum_cards(&self) -> usize {
        MAX_CARDS.max(self.minimum_cards())
    }

    /// Inclusive range of legal card counts.
    #[must_use]
    pub fn card_range(&self) -> RangeInclusive<usize> {
        self.minimum_cards()..=self.maximum_cards()
    }

    /// Whether a game can start with this configuration.
    ///
    /// Besides the card range, the board may hold at most
    /// [`MAX_BOARD_DOTS`] slots.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.match_count >= 2
            && self.dots_per_card >= 1
            && self.card_range().contains(&self.number_of_cards)
            && self
                .number_of_cards
                .checked_mul(self.dots_per_card)
                .is_some_and(|dots| dots <= MAX_BOARD_DOTS)
    }

    /// Clamp `number_of_cards` into [`card_range`](Self::card_range).
    ///
    /// Idempotent.
    pub fn validate_and_adjust(&mut self) {
        let range = self.card_range();
        self.number_of_cards = self.number_of_cards.clamp(*range.start(), *range.end());
    }

    /// Check validity, producing the error a caller should surface.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GameError::InvalidConfiguration {
                match_count: self.match_count,
                dots_per_card: self.dots_per_card,
                number_of_cards: self.number_of_cards,
                minimum_cards: self.minimum_cards(),
                maximum_cards: self.maximum_cards(),
            })
        }
    }

    /// Total dot slots on the board (`number_of_cards * dots_per_card`),
    /// saturating at `usize::MAX`.
    #[must_use]
    pub fn total_dots(&self) -> usize {
        self.number_of_cards.saturating_mul(self.dots_per_card)
    }

    /// Number of complete sets the board holds. Remainder slots stay empty.
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.total_dots().checked_div(self.match_count).unwrap_or(0)
    }

    /// Symbols on the smallest legal board, shown by settings screens.
    #[must_use]
    pub fn total_symbols_needed(&self) -> usize {
        self.match_count.saturating_mul(self.minimum_cards())
    }
}

/// Ordered pool of symbol names, supplied by the presentation layer.
///
/// Set `i` of a board uses symbol `i mod len`, so a pool smaller than the
/// number of sets is reused from the start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolPool {
    names: Vec<String>,
}

/// Symbols used by the stock game.
const DEFAULT_SYMBOLS: [&str; 26] = [
    "star.fill",
    "heart.fill",
    "moon.fill",
    "sun.max.fill",
    "leaf.fill",
    "flame.fill",
    "drop.fill",
    "bolt.fill",
    "gift.fill",
    "diamond.fill",
    "triangle.fill",
    "square.fill",
    "circle.fill",
    "hexagon.fill",
    "pentagon.fill",
    "rhombus.fill",
    "oval.fill",
    "plus.circle.fill",
    "minus.circle.fill",
    "multiply.circle.fill",
    "divide.circle.fill",
    "equal.circle.fill",
    "checkmark.circle.fill",
    "xmark.circle.fill",
    "questionmark.circle.fill",
    "exclamationmark.circle.fill",
];

impl Default for SymbolPool {
    fn default() -> Self {
        Self {
            names: DEFAULT_SYMBOLS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl SymbolPool {
    /// Create a pool from symbol names.
    ///
    /// Fails with [`GameError::EmptySymbolPool`] if `names` is empty,
    /// [`GameError::DuplicateSymbol`] if a name repeats and
    /// [`GameError::SymbolPoolTooLarge`] past [`MAX_SYMBOLS`] names.
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(GameError::EmptySymbolPool);
        }
        if names.len() > MAX_SYMBOLS {
            return Err(GameError::SymbolPoolTooLarge {
                len: names.len(),
                max: MAX_SYMBOLS,
            });
        }

        let duplicate = {
            let mut seen = FxHashSet::default();
            names.iter().find(|name| !seen.insert(name.as_str())).cloned()
        };
        if let Some(name) = duplicate {
            return Err(GameError::DuplicateSymbol { name });
        }
        Ok(Self { names })
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Symbol assigned to set number `set_index`, wrapping around the pool.
    #[must_use]
    pub fn symbol_for_set(&self, set_index: usize) -> SymbolId {
        SymbolId((set_index % self.names.len()) as u16)
    }

    /// Name of a symbol, if it belongs to this pool.
    #[must_use]
    pub fn name(&self, symbol: SymbolId) -> Option<&str> {
        self.names.get(symbol.index()).map(String::as_str)
    }

    /// Iterate over the symbol names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for SymbolPool {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<SymbolPool> for Vec<String> {
    fn from(pool: SymbolPool) -> Self {
        pool.names
    }
}
