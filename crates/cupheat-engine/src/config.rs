//! Trial configuration, validation, and error types.
//!
//! [`TrialConfig`] gathers everything that stays fixed across the trials
//! of one experiment: the grid, the cup, the material tables, the
//! thermometers and the sampling schedule. Per-trial inputs live in
//! [`TrialParams`](crate::TrialParams).

use std::error::Error;
use std::fmt;

use cupheat_core::{GridSpec, GridSpecError, WorldError};
use cupheat_obs::{ObsError, SamplingPlan, Sensors, ThermometerSpec};
use cupheat_propagators::DiffusionStepper;
use cupheat_space::Lattice;
use cupheat_world::{CupSpec, MaterialCatalog, WorldBuilder};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TrialConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid spec is malformed.
    Grid(GridSpecError),
    /// The cup does not fit the grid.
    World(WorldError),
    /// The thermometers or sampling plan are unusable.
    Obs(ObsError),
    /// The diffusion stepper could not be built.
    Stepper {
        /// Builder message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::World(e) => write!(f, "cup: {e}"),
            Self::Obs(e) => write!(f, "sensors: {e}"),
            Self::Stepper { reason } => write!(f, "stepper: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::World(e) => Some(e),
            Self::Obs(e) => Some(e),
            Self::Stepper { .. } => None,
        }
    }
}

impl From<GridSpecError> for ConfigError {
    fn from(e: GridSpecError) -> Self {
        Self::Grid(e)
    }
}

impl From<WorldError> for ConfigError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<ObsError> for ConfigError {
    fn from(e: ObsError) -> Self {
        Self::Obs(e)
    }
}

// ── TrialConfig ────────────────────────────────────────────────────

/// Fixed setup shared by every trial of an experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialConfig {
    /// Grid bounds, temperature range, and tick budget.
    pub spec: GridSpec,
    /// Cup placement and liquid.
    pub cup: CupSpec,
    /// Conductivity tables.
    pub catalog: MaterialCatalog,
    /// Thermometers to place.
    pub thermometers: Vec<ThermometerSpec>,
    /// Ticks between recorded series points. Default: 30.
    pub sample_interval: u64,
    /// Length of a complete trial on the series time axis. Default: 60.
    pub duration_minutes: f64,
    /// Visitation-order seed. `None` draws a fresh seed per trial.
    pub seed: Option<u64>,
}

impl TrialConfig {
    /// The reference cup experiment.
    pub fn reference() -> Self {
        Self {
            spec: GridSpec::reference(),
            cup: CupSpec::reference(),
            catalog: MaterialCatalog::reference(),
            thermometers: ThermometerSpec::reference(),
            sample_interval: 30,
            duration_minutes: 60.0,
            seed: None,
        }
    }

    /// The reference experiment with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sampling schedule derived from the tick budget.
    pub fn sampling_plan(&self) -> SamplingPlan {
        SamplingPlan {
            sample_interval: self.sample_interval,
            max_ticks: self.spec.max_ticks,
            duration_minutes: self.duration_minutes,
        }
    }

    /// Builder for initial grids under this configuration.
    pub fn world_builder(&self) -> WorldBuilder {
        WorldBuilder::new(self.spec.clone(), self.cup.clone(), self.catalog.clone())
    }

    /// Check every structural invariant.
    ///
    /// Runs the same checks trial construction does, so a config that
    /// validates can only fail later on per-trial inputs (unknown
    /// material names).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spec.validate()?;
        let lattice = self.lattice()?;
        self.cup.layout(&lattice)?;
        self.catalog.liquid(&self.cup.liquid)?;
        Sensors::new(&lattice, self.thermometers.clone(), self.sampling_plan())?;
        Ok(())
    }

    pub(crate) fn lattice(&self) -> Result<Lattice, ConfigError> {
        Lattice::from_spec(&self.spec).map_err(|_| ConfigError::Grid(GridSpecError::EmptyGrid))
    }

    pub(crate) fn sensors(&self, lattice: &Lattice) -> Result<Sensors, ConfigError> {
        Ok(Sensors::new(
            lattice,
            self.thermometers.clone(),
            self.sampling_plan(),
        )?)
    }

    pub(crate) fn stepper(&self, seed: u64) -> Result<DiffusionStepper, ConfigError> {
        DiffusionStepper::builder()
            .spec(self.spec.clone())
            .seed(seed)
            .build()
            .map_err(|reason| ConfigError::Stepper { reason })
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::reference()
    }
}
