//! Error types shared across the workspace.
//!
//! [`WorldError`] covers everything that can go wrong while building the
//! initial grid; [`GridSpecError`] covers malformed grid configuration.
//! Both are raised before the first tick, never during stepping.

use std::error::Error;
use std::fmt;

use crate::id::Coord;

/// Errors raised while constructing a world from initial conditions.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldError {
    /// A coordinate (cup corner, thermometer) lies outside the grid bounds.
    InvalidCoordinate {
        /// The offending coordinate.
        coord: Coord,
    },
    /// The cup rectangle cannot hold a liquid region.
    InvalidCupGeometry {
        /// Description of which constraint failed.
        reason: String,
    },
    /// The cup material has no entry in the material table.
    UnknownMaterial {
        /// The name that was looked up.
        name: String,
    },
    /// The liquid has no entry in the liquid table.
    UnknownLiquid {
        /// The name that was looked up.
        name: String,
    },
    /// The grid configuration itself is malformed.
    InvalidGridSpec(GridSpecError),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { coord } => {
                write!(f, "coordinate {coord} is outside the grid")
            }
            Self::InvalidCupGeometry { reason } => write!(f, "invalid cup geometry: {reason}"),
            Self::UnknownMaterial { name } => write!(f, "unknown cup material '{name}'"),
            Self::UnknownLiquid { name } => write!(f, "unknown liquid '{name}'"),
            Self::InvalidGridSpec(e) => write!(f, "invalid grid spec: {e}"),
        }
    }
}

impl Error for WorldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGridSpec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridSpecError> for WorldError {
    fn from(e: GridSpecError) -> Self {
        Self::InvalidGridSpec(e)
    }
}

/// Errors from [`GridSpec::validate()`](crate::GridSpec::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum GridSpecError {
    /// `min > max` on one axis.
    InvertedBounds {
        /// `'x'` or `'y'`.
        axis: char,
        /// Configured minimum.
        min: i32,
        /// Configured maximum.
        max: i32,
    },
    /// `temperature_max - temperature_min` is not strictly positive.
    EmptyTemperatureRange {
        /// Configured minimum temperature.
        min: f64,
        /// Configured maximum temperature.
        max: f64,
    },
    /// A scalar parameter is NaN, infinite, or out of its domain.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `max_ticks` is zero.
    ZeroTicks,
    /// The bounds describe no cells.
    EmptyGrid,
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { axis, min, max } => {
                write!(f, "{axis} bounds inverted: min {min} > max {max}")
            }
            Self::EmptyTemperatureRange { min, max } => {
                write!(f, "temperature range [{min}, {max}] is empty")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::ZeroTicks => write!(f, "max_ticks must be at least 1"),
            Self::EmptyGrid => write!(f, "grid has no cells"),
        }
    }
}

impl Error for GridSpecError {}
