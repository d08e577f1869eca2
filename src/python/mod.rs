//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! config = mm.BoardConfig(match_count=3, dots_per_card=9, number_of_cards=3)
//! game = mm.MatchGame(seed=42)
//! game.on_win(lambda moves, sets: print(f"won in {moves} moves"))
//! game.new_game(config)
//!
//! for card in game.cards():
//!     for dot_id, symbol, revealed, selected, matched in card:
//!         ...
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// memory_match: rules engine for dot-matching memory games.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardConfig>()?;
    m.add_class::<PyMatchGame>()?;

    Ok(())
}
