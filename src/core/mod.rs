//! Core engine types: identifiers, configuration, RNG, errors, game state.
//!
//! Everything here is independent of rendering. The presentation layer
//! supplies a `BoardConfig` and a `SymbolPool`; the engine does the rest.

pub mod entity;
pub mod config;
pub mod rng;
pub mod error;
pub mod state;

pub use entity::{CardId, DotId, SymbolId};
pub use config::{configure, BoardConfig, SymbolPool, DOTS_PER_CARD_RANGE, MATCH_COUNT_RANGE, MAX_BOARD_DOTS, MAX_CARDS, MAX_SYMBOLS};
pub use rng::GameRng;
pub use error::{GameError, Rejection};
pub use state::{GamePhase, GameState, Progress};
