//! Cup geometry.

use cupheat_core::WorldError;
use cupheat_space::{Lattice, Rect};

use crate::world_error;

/// Placement and shape of the cup cross-section.
///
/// The cup occupies `[x, x + width) × [y, y + height)`; the liquid fills
/// the interior inset by `wall_thickness` on every side.
#[derive(Clone, Debug, PartialEq)]
pub struct CupSpec {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Extent along x, wall included.
    pub width: i32,
    /// Extent along y, wall included.
    pub height: i32,
    /// Wall thickness in cells.
    pub wall_thickness: i32,
    /// Name of the liquid filling the interior.
    pub liquid: String,
    /// Nominal starting temperature reported for the cup material.
    ///
    /// Purely informational: wall cells always start at the air
    /// temperature.
    pub nominal_material_temperature: f64,
}

/// Validated cup regions, ready to stamp onto a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CupLayout {
    /// Full cup footprint (wall and interior).
    pub outer: Rect,
    /// Liquid region.
    pub liquid: Rect,
}

impl CupSpec {
    /// The 13×13 cup with a 3-cell wall, filled with water.
    pub fn reference() -> Self {
        Self {
            x: -6,
            y: -8,
            width: 13,
            height: 13,
            wall_thickness: 3,
            liquid: "Water".into(),
            nominal_material_temperature: 25.0,
        }
    }

    /// Resolve the cup regions against `lattice`.
    ///
    /// Geometry is checked before placement, so a cup that is both too
    /// thin and out of bounds reports [`WorldError::InvalidCupGeometry`].
    pub fn layout(&self, lattice: &Lattice) -> Result<CupLayout, WorldError> {
        if self.wall_thickness < 0 {
            return Err(WorldError::InvalidCupGeometry {
                reason: format!("wall thickness {} is negative", self.wall_thickness),
            });
        }
        let outer = Rect::new(self.x, self.y, self.width, self.height).map_err(world_error)?;
        if self.width <= 2 * self.wall_thickness || self.height <= 2 * self.wall_thickness {
            return Err(WorldError::InvalidCupGeometry {
                reason: format!(
                    "{}x{} cup cannot hold liquid with {}-cell walls",
                    self.width, self.height, self.wall_thickness
                ),
            });
        }
        let liquid = outer.inset(self.wall_thickness).map_err(world_error)?;
        outer.check_within(lattice).map_err(world_error)?;
        Ok(CupLayout { outer, liquid })
    }
}

impl Default for CupSpec {
    fn default() -> Self {
        Self::reference()
    }
}
