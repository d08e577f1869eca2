//! # memory-match
//!
//! Rules engine for tile/dot memory games. The player reveals hidden
//! symbols spread across cards, trying to uncover `match_count` identical
//! symbols at a time until every set is found.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: No views, animation or layout math. A
//!    presentation layer reads state and calls `tap_dot`.
//!
//! 2. **Configuration Over Convention**: Set size, dots per card and card
//!    count are all chosen at runtime via `BoardConfig`; symbols come from a
//!    caller-supplied `SymbolPool`.
//!
//! 3. **Synchronous Core**: The reveal delay is a ticket, not a timer, so
//!    every rule is testable without waiting.
//!
//! ## Architecture
//!
//! - **Id-addressed board**: Dots are looked up by `DotId` through a table
//!   owned by the board, never by scanning UI state.
//!
//! - **Persistent Data Structures**: Boards clone in O(1) via `im-rs`, so
//!   observers can keep snapshots.
//!
//! - **Epoch tokens**: A resolution scheduled in one game can never be
//!   applied to the next.
//!
//! ## Modules
//!
//! - `core`: Ids, configuration, RNG, errors, game state
//! - `board`: Dots, cards, board, generator
//! - `rules`: Selection tracking and match resolution
//! - `game`: Controller, scheduled resolutions, observers

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    configure, BoardConfig, SymbolPool,
    CardId, DotId, SymbolId,
    GameRng,
    GameError, Rejection,
    GamePhase, GameState, Progress,
};

pub use crate::board::{Board, BoardGenerator, Card, Dot, DotSlot};

pub use crate::rules::{MatchEngine, Outcome, SelectionTracker};

pub use crate::game::{
    GameController, MatchEvent, Observers, Resolution, ResolutionTicket, WinSummary,
    DEFAULT_RESOLUTION_DELAY,
};
