//! Game lifecycle: the controller, scheduled resolutions and observers.
//!
//! ## Design Philosophy
//!
//! The engine has a single mutator and no clocks. The pause between a full
//! selection and its resolution is a ticket the driver redeems, so the whole
//! game can be played synchronously in tests and driven by any frame loop or
//! timer in an application.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{configure, SymbolPool};
//! use memory_match::game::GameController;
//!
//! let mut controller = GameController::new(SymbolPool::default())
//!     .with_seed(1)
//!     .with_resolution_delay(Duration::from_millis(500));
//!
//! controller.on_win(|summary| println!("won in {} moves", summary.moves));
//! controller.new_game(configure(3, 9, 3)).unwrap();
//!
//! // A frame loop would call this every tick
//! assert!(controller.advance(Duration::from_millis(16)).is_none());
//! ```

mod controller;
mod events;
mod pending;

pub use controller::{GameController, DEFAULT_RESOLUTION_DELAY};
pub use events::{MatchEvent, Observers, Resolution, WinSummary};
pub use pending::ResolutionTicket;
pub use crate::core::GamePhase;
