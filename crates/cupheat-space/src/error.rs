//! Error types for lattice and region operations.

use cupheat_core::Coord;
use std::fmt;

/// Errors arising from lattice construction or spatial queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A rectangle has a non-positive extent or an inset consumes it.
    InvalidRect {
        /// What went wrong.
        reason: String,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::InvalidRect { reason } => write!(f, "invalid rectangle: {reason}"),
            Self::EmptySpace => write!(f, "lattice must have at least one cell"),
        }
    }
}

impl std::error::Error for SpaceError {}
