//! Per-trial constants shared by every snapshot.
//!
//! [`StaticLayer`] stores conductivity and kind, which are set once at world
//! creation and never modified during a trial. It is wrapped in `Arc` so a
//! finished trial can hand it out to any number of readers.

use std::sync::Arc;

use cupheat_core::{CellKind, TemperatureField};

/// Conductivity and kind for every cell, captured once per trial.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticLayer {
    conductivities: Vec<f64>,
    kinds: Vec<CellKind>,
}

/// Shared handle for cross-reader static data sharing.
pub type SharedStaticLayer = Arc<StaticLayer>;

impl StaticLayer {
    /// Capture the static columns of `field`.
    pub fn capture<F: TemperatureField + ?Sized>(field: &F) -> Self {
        Self {
            conductivities: field.conductivities().to_vec(),
            kinds: field.kinds().to_vec(),
        }
    }

    /// Per-cell conductivities.
    pub fn conductivities(&self) -> &[f64] {
        &self.conductivities
    }

    /// Per-cell kinds.
    pub fn kinds(&self) -> &[CellKind] {
        &self.kinds
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.kinds.len()
    }

    /// Memory usage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.conductivities.len() * std::mem::size_of::<f64>()
            + self.kinds.len() * std::mem::size_of::<CellKind>()
    }

    /// Wrap this layer in an `Arc` for sharing.
    pub fn into_shared(self) -> SharedStaticLayer {
        Arc::new(self)
    }
}
