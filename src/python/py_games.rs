//! Game bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DotId, SymbolPool};
use crate::game::{GameController, Resolution};
use crate::rules::Outcome;

use super::py_core::PyBoardConfig;

/// A dot as seen from Python: (id, symbol name, revealed, selected, matched).
type PyDot = (u32, String, bool, bool, bool);

/// Python wrapper for GameController.
///
/// Holds Python callbacks, so it stays on the thread that created it.
#[pyclass(name = "MatchGame", unsendable)]
pub struct PyMatchGame {
    controller: GameController,
}

fn matched(resolution: Option<Resolution>) -> Option<bool> {
    resolution.map(|r| r.outcome == Outcome::Matched)
}

#[pymethods]
impl PyMatchGame {
    /// Create an idle game.
    ///
    /// # Arguments
    /// - symbols: Symbol names (default: the stock 26-symbol pool)
    /// - seed: RNG seed for reproducible layouts (default: random)
    /// - delay_ms: Pause before a full selection resolves
    #[new]
    #[pyo3(signature = (symbols = None, seed = None, delay_ms = 800))]
    fn new(symbols: Option<Vec<String>>, seed: Option<u64>, delay_ms: u64) -> PyResult<Self> {
        let pool = match symbols {
            Some(names) => SymbolPool::new(names).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => SymbolPool::default(),
        };
        let mut controller =
            GameController::new(pool).with_resolution_delay(Duration::from_millis(delay_ms));
        if let Some(seed) = seed {
            controller = controller.with_seed(seed);
        }
        Ok(Self { controller })
    }

    /// Start a new game. Raises ValueError for an invalid configuration.
    fn new_game(&mut self, config: &PyBoardConfig) -> PyResult<()> {
        self.controller
            .new_game(config.0)
            .map(|_| ())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Start over with the current configuration.
    fn reset(&mut self) -> PyResult<()> {
        self.controller
            .reset()
            .map(|_| ())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Tap a dot. Returns True if the tap filled the selection.
    fn tap(&mut self, dot_id: u32) -> bool {
        self.controller.tap_dot(DotId::new(dot_id)).is_some()
    }

    /// Advance the resolution timer. Returns True/False for a match or
    /// mismatch once the pending selection resolves, None otherwise.
    fn advance(&mut self, elapsed_ms: u64) -> Option<bool> {
        matched(self.controller.advance(Duration::from_millis(elapsed_ms)))
    }

    /// Resolve the pending selection immediately.
    fn resolve(&mut self) -> Option<bool> {
        matched(self.controller.resolve_pending())
    }

    /// Register `callback(moves, sets)` to run when the game is won.
    fn on_win(&mut self, callback: PyObject) {
        self.controller.on_win(move |summary| {
            Python::with_gil(|py| {
                if let Err(err) = callback.call1(py, (summary.moves, summary.sets)) {
                    err.print(py);
                }
            });
        });
    }

    /// Register `callback(matched, dot_ids)` to run after each resolution.
    fn on_resolved(&mut self, callback: PyObject) {
        self.controller.on_resolved(move |resolution| {
            let ids: Vec<u32> = resolution.dots.iter().map(|d| d.raw()).collect();
            let is_match = resolution.outcome == Outcome::Matched;
            Python::with_gil(|py| {
                if let Err(err) = callback.call1(py, (is_match, ids)) {
                    err.print(py);
                }
            });
        });
    }

    /// Board snapshot: one list of dots per card.
    fn cards(&self) -> Vec<Vec<PyDot>> {
        let Some(state) = self.controller.state() else {
            return Vec::new();
        };
        let symbols = self.controller.symbols();
        state
            .board()
            .cards()
            .map(|card| {
                card.dots
                    .iter()
                    .map(|d| {
                        let name = symbols.name(d.symbol).unwrap_or_default().to_string();
                        (d.id.raw(), name, d.revealed, d.selected, d.matched)
                    })
                    .collect()
            })
            .collect()
    }

    #[getter]
    fn phase(&self) -> String {
        self.controller.phase().to_string()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.controller.moves()
    }

    #[getter]
    fn won(&self) -> bool {
        self.controller.is_won()
    }

    /// (matched sets, total sets)
    #[getter]
    fn progress(&self) -> (usize, usize) {
        let progress = self.controller.progress();
        (progress.matched_sets, progress.total_sets)
    }

    fn __repr__(&self) -> String {
        let (matched, total) = self.progress();
        format!(
            "MatchGame(phase={}, moves={}, sets={}/{})",
            self.phase(),
            self.moves(),
            matched,
            total
        )
    }
}
