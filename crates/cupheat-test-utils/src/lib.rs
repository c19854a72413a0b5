//! Test fixtures and mock fields for cupheat development.
//!
//! Provides [`MockField`], a hand-populated [`TemperatureField`], and
//! ready-made grids in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cupheat_core::{CellKind, TemperatureField};

/// Mock implementation of [`TemperatureField`].
///
/// Every cell starts as air with conductivity 100. Overwrite temperatures
/// with [`set`](MockField::set) before passing to code under test.
#[derive(Clone, Debug, PartialEq)]
pub struct MockField {
    temperatures: Vec<f64>,
    conductivities: Vec<f64>,
    kinds: Vec<CellKind>,
}

impl MockField {
    pub fn new(temperatures: Vec<f64>) -> Self {
        let n = temperatures.len();
        Self {
            temperatures,
            conductivities: vec![100.0; n],
            kinds: vec![CellKind::Air; n],
        }
    }

    /// A field of `n` cells all at `temperature`.
    pub fn filled(n: usize, temperature: f64) -> Self {
        Self::new(vec![temperature; n])
    }

    pub fn set(&mut self, index: usize, temperature: f64) {
        self.temperatures[index] = temperature;
    }
}

impl TemperatureField for MockField {
    fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    fn conductivities(&self) -> &[f64] {
        &self.conductivities
    }

    fn kinds(&self) -> &[CellKind] {
        &self.kinds
    }
}
