//! Read access shared by live grids and recorded snapshots.

use crate::cell::CellKind;

/// Flat, index-addressed view of a temperature field.
///
/// Indices follow the grid's x-major layout; implementors agree on the
/// mapping through the bounds they were built from. Sensors and the
/// replay hasher read through this trait so they work on both a live
/// grid and any snapshot of it.
pub trait TemperatureField {
    /// Per-cell temperatures, indexed by flat cell index.
    fn temperatures(&self) -> &[f64];

    /// Per-cell conductivities.
    fn conductivities(&self) -> &[f64];

    /// Per-cell kinds.
    fn kinds(&self) -> &[CellKind];

    /// Number of cells.
    fn cell_count(&self) -> usize {
        self.temperatures().len()
    }

    /// Temperature at a flat index, `None` when out of range.
    fn temperature_at(&self, index: usize) -> Option<f64> {
        self.temperatures().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat {
        t: Vec<f64>,
        k: Vec<f64>,
        kinds: Vec<CellKind>,
    }

    impl TemperatureField for Flat {
        fn temperatures(&self) -> &[f64] {
            &self.t
        }
        fn conductivities(&self) -> &[f64] {
            &self.k
        }
        fn kinds(&self) -> &[CellKind] {
            &self.kinds
        }
    }

    #[test]
    fn default_methods_index_temperatures() {
        let f = Flat {
            t: vec![1.0, 2.0],
            k: vec![100.0, 100.0],
            kinds: vec![CellKind::Air; 2],
        };
        assert_eq!(f.cell_count(), 2);
        assert_eq!(f.temperature_at(1), Some(2.0));
        assert_eq!(f.temperature_at(2), None);
    }
}
