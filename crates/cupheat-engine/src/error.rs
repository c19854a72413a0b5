//! Errors raised while running or exporting a trial.

use std::error::Error;
use std::fmt;

use cupheat_arena::ArenaError;
use cupheat_core::WorldError;
use cupheat_obs::ObsError;
use cupheat_propagators::DiffusionError;

use crate::config::ConfigError;

/// Errors from [`LiveTrial`](crate::LiveTrial),
/// [`TrialRunner`](crate::TrialRunner) and tick-state export.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The diffusion step failed.
    Diffusion(DiffusionError),
    /// Thermometer sampling failed.
    Obs(ObsError),
    /// The snapshot arena rejected a tick.
    Arena(ArenaError),
    /// The initial world could not be built.
    World(WorldError),
    /// The trial configuration is invalid.
    Config(ConfigError),
    /// A tick was requested after the trial reached its tick budget.
    TrialComplete,
    /// A finished trial was requested before the tick budget was reached.
    TrialIncomplete {
        /// Ticks executed so far.
        ticks: u64,
        /// Ticks in a complete trial.
        max_ticks: u64,
    },
    /// A snapshot index past the recorded history.
    TickOutOfRange {
        /// Requested tick.
        tick: u64,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diffusion(e) => write!(f, "diffusion: {e}"),
            Self::Obs(e) => write!(f, "sensors: {e}"),
            Self::Arena(e) => write!(f, "snapshot arena: {e}"),
            Self::World(e) => write!(f, "world: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::TrialComplete => write!(f, "trial already complete"),
            Self::TrialIncomplete { ticks, max_ticks } => {
                write!(f, "trial incomplete: {ticks} of {max_ticks} ticks run")
            }
            Self::TickOutOfRange { tick, len } => {
                write!(f, "tick {tick} out of range ({len} snapshots recorded)")
            }
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Diffusion(e) => Some(e),
            Self::Obs(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::World(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DiffusionError> for EngineError {
    fn from(e: DiffusionError) -> Self {
        Self::Diffusion(e)
    }
}

impl From<ObsError> for EngineError {
    fn from(e: ObsError) -> Self {
        Self::Obs(e)
    }
}

impl From<ArenaError> for EngineError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<WorldError> for EngineError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
