//! Stepper errors.

use std::error::Error;
use std::fmt;

/// Errors from [`DiffusionStepper::step()`](crate::DiffusionStepper::step).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffusionError {
    /// The grid does not have the shape the stepper was built for.
    GridMismatch {
        /// Cell count the stepper expects.
        expected: usize,
        /// Cell count of the grid passed in.
        actual: usize,
    },
    /// The visit order is not a permutation of the cell indices.
    InvalidOrder {
        /// What is wrong with the order.
        reason: String,
    },
}

impl fmt::Display for DiffusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridMismatch { expected, actual } => {
                write!(f, "stepper built for {expected} cells, grid has {actual}")
            }
            Self::InvalidOrder { reason } => write!(f, "invalid visit order: {reason}"),
        }
    }
}

impl Error for DiffusionError {}
