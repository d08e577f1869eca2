//! Configuration bindings for Python.

use pyo3::prelude::*;

use crate::core::BoardConfig;

/// Python wrapper for BoardConfig.
#[pyclass(name = "BoardConfig")]
#[derive(Clone, Debug)]
pub struct PyBoardConfig(pub BoardConfig);

#[pymethods]
impl PyBoardConfig {
    /// Create a configuration. Values are taken as given; call
    /// `validate_and_adjust` to clamp the card count.
    #[new]
    #[pyo3(signature = (match_count = 2, dots_per_card = 9, number_of_cards = 2))]
    fn new(match_count: usize, dots_per_card: usize, number_of_cards: usize) -> Self {
        Self(BoardConfig::new(match_count, dots_per_card, number_of_cards))
    }

    #[getter]
    fn match_count(&self) -> usize {
        self.0.match_count
    }

    #[getter]
    fn dots_per_card(&self) -> usize {
        self.0.dots_per_card
    }

    #[getter]
    fn number_of_cards(&self) -> usize {
        self.0.number_of_cards
    }

    /// Change the match count and re-clamp the card count.
    fn set_match_count(&mut self, value: usize) {
        self.0.set_match_count(value);
    }

    /// Change dots per card and re-clamp the card count.
    fn set_dots_per_card(&mut self, value: usize) {
        self.0.set_dots_per_card(value);
    }

    fn set_number_of_cards(&mut self, value: usize) {
        self.0.set_number_of_cards(value);
    }

    fn minimum_cards(&self) -> usize {
        self.0.minimum_cards()
    }

    fn maximum_cards(&self) -> usize {
        self.0.maximum_cards()
    }

    fn is_valid(&self) -> bool {
        self.0.is_valid()
    }

    fn validate_and_adjust(&mut self) {
        self.0.validate_and_adjust();
    }

    fn total_sets(&self) -> usize {
        self.0.total_sets()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardConfig(match_count={}, dots_per_card={}, number_of_cards={})",
            self.0.match_count, self.0.dots_per_card, self.0.number_of_cards
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
