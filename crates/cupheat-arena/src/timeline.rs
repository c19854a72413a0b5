//! Append-only tick history.

use cupheat_core::TemperatureField;
use cupheat_space::Lattice;

use crate::error::ArenaError;
use crate::snapshot::Snapshot;
use crate::static_layer::{SharedStaticLayer, StaticLayer};

/// Every recorded tick of one trial.
///
/// Temperatures are packed tick after tick into one `Vec<f64>`; snapshot
/// `i` occupies `data[i * cells .. (i + 1) * cells]`. Capacity is fixed at
/// construction and reserved up front.
#[derive(Clone, Debug)]
pub struct SnapshotArena {
    lattice: Lattice,
    statics: SharedStaticLayer,
    cells: usize,
    capacity: usize,
    data: Vec<f64>,
}

impl SnapshotArena {
    /// Create an arena for up to `capacity` ticks of `initial`'s shape.
    ///
    /// Conductivity and kind are captured from `initial` now and assumed
    /// constant thereafter. Fails with [`ArenaError::TooLarge`] when the
    /// whole history cannot be reserved.
    pub fn new<F: TemperatureField + ?Sized>(
        lattice: Lattice,
        initial: &F,
        capacity: usize,
    ) -> Result<Self, ArenaError> {
        let cells = lattice.cell_count();
        if initial.cell_count() != cells {
            return Err(ArenaError::CellCountMismatch {
                expected: cells,
                actual: initial.cell_count(),
            });
        }
        let too_large = ArenaError::TooLarge { cells, capacity };
        let len = cells
            .checked_mul(capacity)
            .ok_or_else(|| too_large.clone())?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large)?;
        Ok(Self {
            lattice,
            statics: StaticLayer::capture(initial).into_shared(),
            cells,
            capacity,
            data,
        })
    }

    /// Copy the current temperatures of `field` as the next snapshot.
    pub fn push<F: TemperatureField + ?Sized>(&mut self, field: &F) -> Result<(), ArenaError> {
        let temps = field.temperatures();
        if temps.len() != self.cells {
            return Err(ArenaError::CellCountMismatch {
                expected: self.cells,
                actual: temps.len(),
            });
        }
        if self.len() >= self.capacity {
            return Err(ArenaError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.data.extend_from_slice(temps);
        Ok(())
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        if self.cells == 0 {
            0
        } else {
            self.data.len() / self.cells
        }
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the arena holds `capacity` snapshots.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Snapshot at position `index`.
    pub fn get(&self, index: usize) -> Option<Snapshot<'_>> {
        let start = index.checked_mul(self.cells)?;
        let end = start.checked_add(self.cells)?;
        let temps = self.data.get(start..end)?;
        Some(Snapshot::new(index, temps, &self.statics, &self.lattice))
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> Option<Snapshot<'_>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// All snapshots in recording order.
    pub fn iter(&self) -> impl Iterator<Item = Snapshot<'_>> {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Coordinate mapping of every snapshot.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Shared conductivity and kind data.
    pub fn statics(&self) -> &SharedStaticLayer {
        &self.statics
    }

    /// Memory usage of recorded data in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>() + self.statics.memory_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupheat_core::{CellKind, Coord, GridSpec};
    use cupheat_test_utils::{fixtures, MockField};

    #[test]
    fn push_and_read_back_in_order() {
        let spec = fixtures::small_spec(2, 2);
        let lattice = Lattice::from_spec(&spec).unwrap();
        let mut arena = SnapshotArena::new(lattice, &MockField::filled(4, 0.0), 3).unwrap();
        for t in 0..3 {
            arena.push(&MockField::filled(4, t as f64)).unwrap();
        }
        assert_eq!(arena.len(), 3);
        assert!(arena.is_full());
        for (i, snap) in arena.iter().enumerate() {
            assert_eq!(snap.index(), i);
            assert_eq!(snap.tick_id().0, i as u64 + 1);
            assert!(snap.temperatures().iter().all(|&v| v == i as f64));
        }
        assert_eq!(arena.latest().unwrap().index(), 2);
        assert!(arena.get(3).is_none());
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let spec = fixtures::small_spec(2, 1);
        let mut grid = fixtures::uniform(spec.clone(), 10.0);
        let mut arena =
            SnapshotArena::new(Lattice::from_spec(&spec).unwrap(), &grid, 2).unwrap();
        arena.push(&grid).unwrap();
        grid.set_temperature(Coord::new(0, 0), 99.0).unwrap();
        arena.push(&grid).unwrap();
        assert_eq!(arena.get(0).unwrap().cell(Coord::new(0, 0)).unwrap().temperature, 10.0);
        assert_eq!(arena.get(1).unwrap().cell(Coord::new(0, 0)).unwrap().temperature, 99.0);
    }

    #[test]
    fn oversized_history_is_an_error() {
        let lattice = Lattice::new(0, 1, 0, 1).unwrap();
        let initial = MockField::filled(4, 0.0);
        assert_eq!(
            SnapshotArena::new(lattice.clone(), &initial, usize::MAX).unwrap_err(),
            ArenaError::TooLarge {
                cells: 4,
                capacity: usize::MAX
            }
        );
        // fits in usize, but not in the address space
        assert!(matches!(
            SnapshotArena::new(lattice, &initial, usize::MAX / 4),
            Err(ArenaError::TooLarge { .. })
        ));
    }

    #[test]
    fn capacity_is_enforced() {
        let lattice = Lattice::new(0, 0, 0, 0).unwrap();
        let f = MockField::filled(1, 0.0);
        let mut arena = SnapshotArena::new(lattice, &f, 1).unwrap();
        arena.push(&f).unwrap();
        assert_eq!(
            arena.push(&f),
            Err(ArenaError::CapacityExceeded { capacity: 1 })
        );
    }

    #[test]
    fn shape_mismatch_rejected() {
        let lattice = Lattice::new(0, 1, 0, 1).unwrap();
        assert!(SnapshotArena::new(lattice.clone(), &MockField::filled(3, 0.0), 1).is_err());
        let mut arena = SnapshotArena::new(lattice, &MockField::filled(4, 0.0), 1).unwrap();
        assert_eq!(
            arena.push(&MockField::filled(5, 0.0)),
            Err(ArenaError::CellCountMismatch {
                expected: 4,
                actual: 5
            })
        );
        assert!(arena.is_empty());
    }

    #[test]
    fn views_share_static_columns() {
        let grid = fixtures::aluminum_hot_cold();
        let spec = GridSpec::reference();
        let mut arena =
            SnapshotArena::new(Lattice::from_spec(&spec).unwrap(), &grid, 2).unwrap();
        arena.push(&grid).unwrap();
        arena.push(&grid).unwrap();
        let a = arena.get(0).unwrap();
        assert_eq!(a.cell(Coord::new(-6, -8)).unwrap().kind, CellKind::Wall);
        assert_eq!(a.cell(Coord::new(-6, -8)).unwrap().conductivity, 200.0);
        assert_eq!(a.cells().count(), 651);
        assert_eq!(a.mean_temperature(CellKind::Liquid), Some(90.0));
        assert_eq!(a.mean_temperature(CellKind::Air), Some(5.0));
        assert!(std::ptr::eq(
            a.conductivities().as_ptr(),
            arena.get(1).unwrap().conductivities().as_ptr()
        ));
    }
}
