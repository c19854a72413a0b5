//! Borrowed view of one recorded tick.

use cupheat_core::{CellKind, CellView, Coord, TemperatureField, TickId};
use cupheat_space::Lattice;

use crate::static_layer::StaticLayer;

/// Full grid state after one tick, borrowed from a
/// [`SnapshotArena`](crate::SnapshotArena).
///
/// Snapshot `i` holds the state after tick `i + 1`.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    index: usize,
    temperatures: &'a [f64],
    statics: &'a StaticLayer,
    lattice: &'a Lattice,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(
        index: usize,
        temperatures: &'a [f64],
        statics: &'a StaticLayer,
        lattice: &'a Lattice,
    ) -> Self {
        Self {
            index,
            temperatures,
            statics,
            lattice,
        }
    }

    /// Position in the arena.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Tick count after which this state was captured (`index + 1`).
    pub fn tick_id(&self) -> TickId {
        TickId(self.index as u64 + 1)
    }

    /// Coordinate mapping shared with the live grid.
    pub fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// Copy of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Option<CellView> {
        self.lattice.index_of(coord).map(|i| self.view(i, coord))
    }

    /// Every cell in flat-index order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + 'a {
        let this = *self;
        let lattice: &'a Lattice = self.lattice;
        lattice
            .coords()
            .enumerate()
            .map(move |(i, c)| this.view(i, c))
    }

    /// Mean temperature over the cells of `kind`, `None` if there are none.
    pub fn mean_temperature(&self, kind: CellKind) -> Option<f64> {
        let (sum, n) = self
            .temperatures
            .iter()
            .zip(self.statics.kinds())
            .filter(|(_, &k)| k == kind)
            .fold((0.0, 0usize), |(s, n), (&t, _)| (s + t, n + 1));
        (n > 0).then(|| sum / n as f64)
    }

    fn view(&self, index: usize, coord: Coord) -> CellView {
        CellView {
            coord,
            temperature: self.temperatures[index],
            conductivity: self.statics.conductivities()[index],
            kind: self.statics.kinds()[index],
        }
    }
}

impl TemperatureField for Snapshot<'_> {
    fn temperatures(&self) -> &[f64] {
        self.temperatures
    }

    fn conductivities(&self) -> &[f64] {
        self.statics.conductivities()
    }

    fn kinds(&self) -> &[CellKind] {
        self.statics.kinds()
    }
}
