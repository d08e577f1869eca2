//! Error taxonomy.
//!
//! Two classes of failure exist and both are recoverable:
//! - `InvalidConfiguration`: a game cannot start with the given board
//!   parameters. Surfaced to the caller.
//! - `IllegalAction`: a tap arrived at a moment or on a dot where it has no
//!   effect. Expected during normal play (UI races), so the controller's
//!   `tap_dot` ignores it; `try_tap_dot` reports it for callers that care.

use derive_more::{Display, Error};

use super::entity::DotId;
use super::state::GamePhase;

/// Errors returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board parameters fall outside the playable range.
    #[display(
        "invalid configuration: match {match_count} across {number_of_cards} cards of {dots_per_card} dots (cards must be in {minimum_cards}..={maximum_cards})"
    )]
    InvalidConfiguration {
        match_count: usize,
        dots_per_card: usize,
        number_of_cards: usize,
        minimum_cards: usize,
        maximum_cards: usize,
    },

    /// A symbol pool must hold at least one symbol.
    #[display("symbol pool is empty")]
    EmptySymbolPool,

    /// Symbol names must be distinct; equal names would look alike but
    /// never match.
    #[display("symbol {name:?} appears more than once in the pool")]
    DuplicateSymbol { name: String },

    /// More names than a `SymbolId` can address.
    #[display("symbol pool holds {len} names, at most {max} are addressable")]
    SymbolPoolTooLarge { len: usize, max: usize },

    /// A tap or selection that the current state does not allow.
    #[display("illegal action: {rejection}")]
    IllegalAction { rejection: Rejection },
}

/// Why a selection was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Rejection {
    /// No game has been started.
    #[display("no game in progress")]
    NoGame,
    /// Taps are only accepted while the game is `Ready`.
    #[display("game is {_0}, not ready")]
    NotReady(GamePhase),
    /// The id does not name a dot on the current board.
    #[display("{_0} is not on the board")]
    UnknownDot(DotId),
    /// The dot is part of a completed set.
    #[display("{_0} is already matched")]
    AlreadyMatched(DotId),
    /// The dot is face-up in the current selection.
    #[display("{_0} is already revealed")]
    AlreadyRevealed(DotId),
    /// The selection already holds `match_count` dots.
    #[display("selection is full")]
    SelectionFull,
}

impl From<Rejection> for GameError {
    fn from(rejection: Rejection) -> Self {
        GameError::IllegalAction { rejection }
    }
}
