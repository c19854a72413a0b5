//! Sensor errors.

use std::error::Error;
use std::fmt;

use cupheat_core::Coord;

/// Errors from sensor construction and sampling.
#[derive(Clone, Debug, PartialEq)]
pub enum ObsError {
    /// A thermometer is placed outside the grid.
    ThermometerOutOfBounds {
        /// Thermometer label.
        label: String,
        /// Requested position.
        coord: Coord,
    },
    /// Two thermometers share a label.
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
    /// The sampling plan is unusable.
    InvalidPlan {
        /// Which constraint failed.
        reason: String,
    },
    /// The field being sampled is smaller than the grid the sensors were
    /// placed on.
    FieldTooSmall {
        /// Cells the sensors need.
        required: usize,
        /// Cells the field has.
        actual: usize,
    },
}

impl fmt::Display for ObsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThermometerOutOfBounds { label, coord } => {
                write!(f, "thermometer '{label}' at {coord} is outside the grid")
            }
            Self::DuplicateLabel { label } => write!(f, "duplicate thermometer label '{label}'"),
            Self::InvalidPlan { reason } => write!(f, "invalid sampling plan: {reason}"),
            Self::FieldTooSmall { required, actual } => {
                write!(f, "field has {actual} cells, sensors need {required}")
            }
        }
    }
}

impl Error for ObsError {}
