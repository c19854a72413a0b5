//! Initial world construction.

use tracing::debug;

use cupheat_core::{CellKind, GridSpec, WorldError};

use crate::cup::CupSpec;
use crate::grid::Grid;
use crate::materials::MaterialCatalog;

/// Stamps the air, wall, and liquid regions onto a fresh [`Grid`].
///
/// Stamping order is fixed: air everywhere, then the whole cup footprint
/// as wall, then the interior as liquid. Wall cells keep the air
/// temperature; only the liquid region starts at its own temperature.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldBuilder {
    spec: GridSpec,
    cup: CupSpec,
    catalog: MaterialCatalog,
}

impl WorldBuilder {
    /// Create a builder from explicit configuration.
    pub fn new(spec: GridSpec, cup: CupSpec, catalog: MaterialCatalog) -> Self {
        Self { spec, cup, catalog }
    }

    /// The reference grid, cup, and material tables.
    pub fn reference() -> Self {
        Self::new(
            GridSpec::reference(),
            CupSpec::reference(),
            MaterialCatalog::reference(),
        )
    }

    /// Grid configuration.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Cup geometry.
    pub fn cup(&self) -> &CupSpec {
        &self.cup
    }

    /// Material and liquid tables.
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Build the initial grid.
    ///
    /// An unset or empty `material` yields a uniform air world; the
    /// liquid is only stamped inside a cup, so `liquid_temperature` is
    /// ignored in that case.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidGridSpec`] for a malformed spec,
    /// [`WorldError::InvalidCupGeometry`] or [`WorldError::InvalidCoordinate`]
    /// for a cup that does not fit, [`WorldError::UnknownMaterial`] and
    /// [`WorldError::UnknownLiquid`] for names missing from the catalog.
    pub fn build_world(
        &self,
        material: Option<&str>,
        liquid_temperature: Option<f64>,
        air_temperature: f64,
    ) -> Result<Grid, WorldError> {
        let mut grid = Grid::uniform(self.spec.clone(), air_temperature, self.catalog.air)?;
        let layout = self.cup.layout(grid.lattice())?;

        let Some(material) = material.filter(|m| !m.is_empty()) else {
            debug!(air_temperature, "built air-only world");
            return Ok(grid);
        };
        let wall_k = self.catalog.material(material)?;
        for coord in layout.outer.coords() {
            grid.set_cell(coord, air_temperature, wall_k, CellKind::Wall)?;
        }

        if let Some(liquid_temperature) = liquid_temperature {
            let liquid_k = self.catalog.liquid(&self.cup.liquid)?;
            for coord in layout.liquid.coords() {
                grid.set_cell(coord, liquid_temperature, liquid_k, CellKind::Liquid)?;
            }
        }

        debug!(
            material,
            liquid = %self.cup.liquid,
            ?liquid_temperature,
            air_temperature,
            walls = grid.count_kind(CellKind::Wall),
            liquid_cells = grid.count_kind(CellKind::Liquid),
            "built cup world"
        );
        Ok(grid)
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::reference()
    }
}
