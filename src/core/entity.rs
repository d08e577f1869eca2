//! Identifiers for board entities.
//!
//! Every dot and card on a board has a unique id. Ids are allocated by the
//! [`BoardGenerator`](crate::board::BoardGenerator) from counters that keep
//! running across games, so an id from a discarded board never names a dot
//! on the current one.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{DotId, SymbolId};
//!
//! let dot = DotId::new(7);
//! assert_eq!(dot.raw(), 7);
//! assert_eq!(format!("{}", dot), "Dot(7)");
//!
//! let symbol = SymbolId::new(3);
//! assert_eq!(symbol.index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dot.
///
/// Stable for the lifetime of the dot; never reused by the generator
/// that allocated it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DotId(pub u32);

impl DotId {
    /// Create a new dot ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for DotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dot({})", self.0)
    }
}

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Symbol identifier: an index into the game's [`SymbolPool`](super::SymbolPool).
///
/// Two dots match when their `SymbolId`s are equal. When a board needs more
/// sets than the pool holds, later sets reuse earlier ids, so those sets
/// are interchangeable for matching purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position of this symbol in its pool.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
