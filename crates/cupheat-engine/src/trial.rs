//! Complete trials and the runner that produces them.

use cupheat_arena::{Snapshot, SnapshotArena};
use cupheat_core::GridSpec;
use cupheat_obs::{Reading, SamplingPlan, Sensors, Series, Thermometer};
use cupheat_world::{CupSpec, Grid};

use crate::config::{ConfigError, TrialConfig};
use crate::error::EngineError;
use crate::live::LiveTrial;
use crate::metrics::StepMetrics;
use crate::params::{TrialId, TrialParams};

// ── TrialRunner ────────────────────────────────────────────────────

/// Runs trials under one validated [`TrialConfig`].
#[derive(Clone, Debug)]
pub struct TrialRunner {
    config: TrialConfig,
}

impl TrialRunner {
    /// Validate `config` and wrap it.
    pub fn new(config: TrialConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runner for the reference experiment.
    pub fn reference() -> Result<Self, ConfigError> {
        Self::new(TrialConfig::reference())
    }

    /// Configuration in force.
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Build the initial grid for `params`.
    pub fn build_grid(&self, params: &TrialParams) -> Result<Grid, EngineError> {
        Ok(self.config.world_builder().build_world(
            params.material.as_deref(),
            params.liquid_temperature,
            params.air_temperature,
        )?)
    }

    /// Build the world for `params` and return it ready to step.
    pub fn start(&self, params: TrialParams) -> Result<LiveTrial, EngineError> {
        let grid = self.build_grid(&params)?;
        self.start_with_grid(grid, params)
    }

    /// Take ownership of a prepared grid and return it ready to step.
    ///
    /// The grid must have the configured bounds.
    pub fn start_with_grid(
        &self,
        grid: Grid,
        params: TrialParams,
    ) -> Result<LiveTrial, EngineError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        LiveTrial::new(&self.config, grid, params, seed)
    }

    /// Run exactly `max_ticks` ticks over `grid`.
    pub fn run_trial(&self, grid: Grid, params: TrialParams) -> Result<Trial, EngineError> {
        let mut live = self.start_with_grid(grid, params)?;
        live.run_to_end()?;
        live.into_trial()
    }

    /// Build the world for `params` and run it to completion.
    pub fn run(&self, params: TrialParams) -> Result<Trial, EngineError> {
        let grid = self.build_grid(&params)?;
        self.run_trial(grid, params)
    }
}

// ── Trial ──────────────────────────────────────────────────────────

/// A finished trial: `max_ticks` snapshots plus the recorded series.
///
/// Immutable and `Send + Sync`; share it freely between readers.
#[derive(Clone, Debug)]
pub struct Trial {
    id: TrialId,
    params: TrialParams,
    spec: GridSpec,
    cup: CupSpec,
    sensors: Sensors,
    snapshots: SnapshotArena,
    seed: u64,
    last_metrics: StepMetrics,
}

const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Trial>();
    }
};

impl Trial {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: TrialId,
        params: TrialParams,
        spec: GridSpec,
        cup: CupSpec,
        sensors: Sensors,
        snapshots: SnapshotArena,
        seed: u64,
        last_metrics: StepMetrics,
    ) -> Self {
        Self {
            id,
            params,
            spec,
            cup,
            sensors,
            snapshots,
            seed,
            last_metrics,
        }
    }

    /// Trial identifier.
    pub fn id(&self) -> &TrialId {
        &self.id
    }

    /// Initial conditions.
    pub fn params(&self) -> &TrialParams {
        &self.params
    }

    /// Grid configuration.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Cup configuration.
    pub fn cup(&self) -> &CupSpec {
        &self.cup
    }

    /// Sampling schedule the series were recorded with.
    pub fn plan(&self) -> &SamplingPlan {
        self.sensors.plan()
    }

    /// Visitation-order seed; rerunning with it reproduces the trial.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics of the final tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Number of snapshots, always `max_ticks`.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshot was recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// State after tick `index + 1`.
    pub fn snapshot(&self, index: usize) -> Option<Snapshot<'_>> {
        self.snapshots.get(index)
    }

    /// Like [`snapshot`](Self::snapshot), with an error for a bad index.
    pub fn try_snapshot(&self, tick: u64) -> Result<Snapshot<'_>, EngineError> {
        usize::try_from(tick)
            .ok()
            .and_then(|i| self.snapshots.get(i))
            .ok_or(EngineError::TickOutOfRange {
                tick,
                len: self.snapshots.len(),
            })
    }

    /// Every snapshot in tick order.
    pub fn snapshots(&self) -> &SnapshotArena {
        &self.snapshots
    }

    /// Recorded series.
    pub fn series(&self) -> &[Series] {
        self.sensors.series()
    }

    /// Series recorded by the thermometer labelled `label`.
    pub fn series_for(&self, label: &str) -> Option<&Series> {
        self.sensors.series_for(label)
    }

    /// Thermometers with their final readings.
    pub fn thermometers(&self) -> &[Thermometer] {
        self.sensors.thermometers()
    }

    /// Every thermometer read from snapshot `tick`.
    pub fn readings_at(&self, tick: u64) -> Result<Vec<Reading>, EngineError> {
        let snapshot = self.try_snapshot(tick)?;
        Ok(self.sensors.read(&snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TemperatureLabel;
    use cupheat_core::{CellKind, Coord};

    fn reference_trial(seed: u64) -> Trial {
        let runner = TrialRunner::new(TrialConfig::reference().with_seed(seed)).unwrap();
        runner
            .run(TrialParams::labelled(
                "Aluminum",
                TemperatureLabel::Hot,
                TemperatureLabel::Cold,
            ))
            .unwrap()
    }

    #[test]
    fn full_trial_shape() {
        let trial = reference_trial(1);
        assert_eq!(trial.len(), 900);
        assert_eq!(trial.series_for("beverage").unwrap().len(), 30);
        assert_eq!(trial.series().len(), 1);
        assert_eq!(trial.id().to_string(), "Aluminum-HotBev-ColdAir");
        assert_eq!(trial.snapshot(899).unwrap().tick_id().0, 900);
        assert!(trial.snapshot(900).is_none());
    }

    #[test]
    fn out_of_range_tick_reported() {
        let trial = reference_trial(2);
        assert!(matches!(
            trial.try_snapshot(900),
            Err(EngineError::TickOutOfRange { tick: 900, len: 900 })
        ));
        assert!(trial.readings_at(1_000).is_err());
    }

    #[test]
    fn series_points_match_snapshots() {
        let trial = reference_trial(3);
        let bev = trial.series_for("beverage").unwrap();
        for (k, point) in bev.points.iter().enumerate() {
            let snap = trial.snapshot(k * 30).unwrap();
            let t = snap.cell(Coord::new(0, -1)).unwrap().temperature;
            assert_eq!(point.temperature, t);
            assert!((point.time - 2.0 * k as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn readings_at_reads_snapshot() {
        let trial = reference_trial(4);
        let r = trial.readings_at(899).unwrap();
        assert_eq!(r[0].label, "beverage");
        assert_eq!(r[1].label, "air");
        assert_eq!(Some(r[0].temperature), trial.thermometers()[0].last_temperature());
    }

    #[test]
    fn unknown_material_fails_before_running() {
        let runner = TrialRunner::reference().unwrap();
        let err = runner
            .run(TrialParams::new(Some("Tin".into()), Some(90.0), 5.0))
            .unwrap_err();
        assert!(matches!(err, EngineError::World(_)));
    }

    #[test]
    fn air_only_trial_stays_uniform() {
        let runner = TrialRunner::new(TrialConfig::reference().with_seed(5)).unwrap();
        let trial = runner.run(TrialParams::new(None, Some(90.0), 40.0)).unwrap();
        let last = trial.snapshot(899).unwrap();
        assert!(last.cells().all(|c| c.kind == CellKind::Air && c.temperature == 40.0));
    }
}
