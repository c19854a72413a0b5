//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A field handed to the arena has the wrong number of cells.
    CellCountMismatch {
        /// Cells the arena was created for.
        expected: usize,
        /// Cells in the offered field.
        actual: usize,
    },
    /// The arena already holds its configured number of ticks.
    CapacityExceeded {
        /// Configured tick capacity.
        capacity: usize,
    },
    /// `cells * capacity` temperatures cannot be addressed or reserved.
    TooLarge {
        /// Cells per tick.
        cells: usize,
        /// Requested tick capacity.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "arena holds {expected} cells per tick, got {actual}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "arena is full at {capacity} ticks")
            }
            Self::TooLarge { cells, capacity } => {
                write!(f, "cannot reserve {capacity} ticks of {cells} cells")
            }
        }
    }
}

impl Error for ArenaError {}
