//! Struct-of-arrays cell storage.

use cupheat_core::{CellKind, CellView, Coord, GridSpec, TemperatureField, WorldError};
use cupheat_space::Lattice;

use crate::world_error;

/// Every cell of one trial.
///
/// Temperature, conductivity, and kind live in parallel vectors indexed
/// by the lattice's flat index. Conductivity and kind are fixed once the
/// world has been built; only the diffusion stepper mutates temperatures.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    spec: GridSpec,
    lattice: Lattice,
    temperatures: Vec<f64>,
    conductivities: Vec<f64>,
    kinds: Vec<CellKind>,
}

impl Grid {
    /// A grid where every cell is air at `temperature` with `conductivity`.
    ///
    /// Validates `spec` first.
    pub fn uniform(spec: GridSpec, temperature: f64, conductivity: f64) -> Result<Self, WorldError> {
        spec.validate()?;
        let lattice = Lattice::from_spec(&spec).map_err(world_error)?;
        let n = lattice.cell_count();
        Ok(Self {
            spec,
            lattice,
            temperatures: vec![temperature; n],
            conductivities: vec![conductivity; n],
            kinds: vec![CellKind::Air; n],
        })
    }

    /// The configuration this grid was built from.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Coordinate mapping for this grid.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Copy of the cell at `coord`, or `None` outside the bounds.
    pub fn cell(&self, coord: Coord) -> Option<CellView> {
        self.lattice.index_of(coord).map(|i| self.view(i, coord))
    }

    /// Copy of the cell at flat `index`.
    pub fn cell_at(&self, index: usize) -> Option<CellView> {
        self.lattice.coord_of(index).map(|c| self.view(index, c))
    }

    /// Every cell in flat-index order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.lattice
            .coords()
            .enumerate()
            .map(|(i, c)| self.view(i, c))
    }

    /// Overwrite one cell completely.
    pub fn set_cell(
        &mut self,
        coord: Coord,
        temperature: f64,
        conductivity: f64,
        kind: CellKind,
    ) -> Result<(), WorldError> {
        let i = self.lattice.try_index(coord).map_err(world_error)?;
        self.temperatures[i] = temperature;
        self.conductivities[i] = conductivity;
        self.kinds[i] = kind;
        Ok(())
    }

    /// Overwrite only the temperature of one cell.
    pub fn set_temperature(&mut self, coord: Coord, temperature: f64) -> Result<(), WorldError> {
        let i = self.lattice.try_index(coord).map_err(world_error)?;
        self.temperatures[i] = temperature;
        Ok(())
    }

    /// Mutable temperatures alongside the read-only conductivities.
    ///
    /// The split borrow lets the stepper update in place while reading
    /// coupling coefficients.
    pub fn temperatures_mut(&mut self) -> (&mut [f64], &[f64]) {
        (&mut self.temperatures, &self.conductivities)
    }

    /// Number of cells of the given kind.
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.kinds.iter().filter(|&&k| k == kind).count()
    }

    fn view(&self, index: usize, coord: Coord) -> CellView {
        CellView {
            coord,
            temperature: self.temperatures[index],
            conductivity: self.conductivities[index],
            kind: self.kinds[index],
        }
    }
}

impl TemperatureField for Grid {
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

#[cfg(test)]
mod tests {
    use super::*;
    use cupheat_core::GridSpecError;

    fn small_spec() -> GridSpec {
        GridSpec {
            min_x: -1,
            max_x: 1,
            min_y: -1,
            max_y: 1,
            ..GridSpec::reference()
        }
    }

    #[test]
    fn uniform_fills_every_cell() {
        let g = Grid::uniform(small_spec(), 20.0, 100.0).unwrap();
        assert_eq!(g.cell_count(), 9);
        assert!(g.cells().all(|c| c.temperature == 20.0
            && c.conductivity == 100.0
            && c.kind == CellKind::Air));
        assert_eq!(g.count_kind(CellKind::Air), 9);
    }

    #[test]
    fn invalid_spec_is_rejected() {
        let spec = GridSpec {
            max_ticks: 0,
            ..small_spec()
        };
        assert_eq!(
            Grid::uniform(spec, 0.0, 1.0),
            Err(WorldError::InvalidGridSpec(GridSpecError::ZeroTicks))
        );
    }

    #[test]
    fn set_cell_round_trips_through_view() {
        let mut g = Grid::uniform(small_spec(), 0.0, 100.0).unwrap();
        g.set_cell(Coord::new(1, -1), 55.0, 20.0, CellKind::Wall)
            .unwrap();
        let c = g.cell(Coord::new(1, -1)).unwrap();
        assert_eq!(c.temperature, 55.0);
        assert_eq!(c.conductivity, 20.0);
        assert_eq!(c.kind, CellKind::Wall);
        let i = g.lattice().index_of(Coord::new(1, -1)).unwrap();
        assert_eq!(g.cell_at(i), Some(c));
    }

    #[test]
    fn out_of_bounds_writes_fail() {
        let mut g = Grid::uniform(small_spec(), 0.0, 100.0).unwrap();
        assert_eq!(
            g.set_temperature(Coord::new(2, 0), 1.0),
            Err(WorldError::InvalidCoordinate {
                coord: Coord::new(2, 0)
            })
        );
        assert!(g.cell(Coord::new(0, 2)).is_none());
    }

    #[test]
    fn cells_follow_flat_order() {
        let g = Grid::uniform(small_spec(), 0.0, 100.0).unwrap();
        let coords: Vec<Coord> = g.cells().map(|c| c.coord).take(4).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(-1, -1),
                Coord::new(-1, 0),
                Coord::new(-1, 1),
                Coord::new(0, -1)
            ]
        );
    }
}
