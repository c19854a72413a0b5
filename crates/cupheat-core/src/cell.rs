//! Cell kinds and the read-only per-cell view.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::Coord;

/// What occupies a grid cell.
///
/// Assigned once by the world builder and fixed for the lifetime of a
/// trial. Only temperature evolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Ambient air surrounding the cup.
    #[default]
    Air,
    /// Cup wall material.
    Wall,
    /// Beverage inside the cup.
    Liquid,
}

impl CellKind {
    /// Lowercase name used in exported state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Wall => "wall",
            Self::Liquid => "liquid",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A copy of one cell's state, as exposed by grids and snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    /// Position of the cell.
    pub coord: Coord,
    /// Current temperature.
    pub temperature: f64,
    /// Thermal conductivity, non-negative.
    pub conductivity: f64,
    /// What the cell contains.
    pub kind: CellKind,
}
