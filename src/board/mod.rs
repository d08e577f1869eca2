//! Board system: dots, cards, the board, and its generator.
//!
//! ## Key Types
//!
//! - `Dot`: One hidden symbol with revealed/selected/matched flags
//! - `Card`: Ordered group of dots
//! - `Board`: All cards in a game, addressable by `DotId` or position
//! - `BoardGenerator`: Builds shuffled boards from a `BoardConfig`

pub mod dot;
pub mod layout;
pub mod generator;

pub use dot::{Card, Dot};
pub use layout::{Board, DotSlot};
pub use generator::BoardGenerator;
