//! Error types for replay comparison.

use std::error::Error;
use std::fmt;

use cupheat_engine::EngineError;

/// Errors that stop a comparison before a verdict is reached.
///
/// A divergence is not an error; it is reported as a
/// [`DivergenceReport`](crate::DivergenceReport).
#[derive(Clone, Debug, PartialEq)]
pub enum ReplayError {
    /// The two runs recorded a different number of ticks.
    LengthMismatch {
        /// Ticks in the recorded run.
        recorded: usize,
        /// Ticks in the replayed run.
        replayed: usize,
    },
    /// The two runs have grids of different sizes.
    CellCountMismatch {
        /// Cells per snapshot in the recorded run.
        recorded: usize,
        /// Cells per snapshot in the replayed run.
        replayed: usize,
    },
    /// Rerunning the trial failed.
    Engine(EngineError),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { recorded, replayed } => write!(
                f,
                "length mismatch: recorded {recorded} ticks, replayed {replayed}"
            ),
            Self::CellCountMismatch { recorded, replayed } => write!(
                f,
                "cell count mismatch: recorded {recorded}, replayed {replayed}"
            ),
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

impl Error for ReplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for ReplayError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}
