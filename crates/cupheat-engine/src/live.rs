//! Tick-by-tick trial execution.
//!
//! [`LiveTrial`] owns the grid of one trial and advances it a single tick
//! per [`step_sync()`](LiveTrial::step_sync) call. The caller may inspect
//! or render between ticks and may stop at any tick boundary; nothing
//! runs in the background.
//!
//! # Ownership model
//!
//! The grid is moved in at construction and only mutated by
//! `step_sync()`, which takes `&mut self`. Recorded snapshots are never
//! written again once pushed.

use std::time::Instant;

use tracing::info;

use cupheat_arena::{Snapshot, SnapshotArena};
use cupheat_core::{GridSpec, TemperatureField, TickId};
use cupheat_obs::{Reading, Sensors};
use cupheat_propagators::DiffusionStepper;
use cupheat_world::{CupSpec, Grid};

use crate::config::TrialConfig;
use crate::error::EngineError;
use crate::metrics::StepMetrics;
use crate::params::{TrialId, TrialParams};
use crate::trial::Trial;

// Compile-time assertion: LiveTrial can move to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LiveTrial>();
    }
};

// ── RunState ───────────────────────────────────────────────────────

/// Lifecycle of a trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No tick has run yet.
    NotStarted,
    /// At least one tick has run and the budget is not exhausted.
    Running,
    /// `max_ticks` ticks have run.
    Complete,
}

// ── TickReport ─────────────────────────────────────────────────────

/// Result of a successful [`LiveTrial::step_sync()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Ticks completed, including this one.
    pub tick: TickId,
    /// Thermometer readings taken after this tick's diffusion step.
    pub readings: Vec<Reading>,
    /// Whether this tick appended a series point.
    pub sampled: bool,
    /// Timing for this tick.
    pub metrics: StepMetrics,
}

// ── LiveTrial ──────────────────────────────────────────────────────

/// A trial in progress.
///
/// Created by [`TrialRunner::start()`](crate::TrialRunner::start). Each
/// [`step_sync()`](Self::step_sync) runs one complete tick: diffuse, read
/// the thermometers at the pre-increment tick count, increment, record a
/// snapshot.
pub struct LiveTrial {
    id: TrialId,
    params: TrialParams,
    spec: GridSpec,
    cup: CupSpec,
    grid: Grid,
    stepper: DiffusionStepper,
    sensors: Sensors,
    snapshots: SnapshotArena,
    ticks: u64,
    state: RunState,
    seed: u64,
    last_metrics: StepMetrics,
}

impl LiveTrial {
    pub(crate) fn new(
        config: &TrialConfig,
        grid: Grid,
        params: TrialParams,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let lattice = config.lattice()?;
        let stepper = config.stepper(seed)?;
        let sensors = config.sensors(&lattice)?;
        // A budget beyond usize can never be reserved; let the arena say so.
        let capacity = usize::try_from(config.spec.max_ticks).unwrap_or(usize::MAX);
        let snapshots = SnapshotArena::new(lattice, &grid, capacity)?;
        Ok(Self {
            id: params.trial_id(),
            params,
            spec: config.spec.clone(),
            cup: config.cup.clone(),
            grid,
            stepper,
            sensors,
            snapshots,
            ticks: 0,
            state: RunState::NotStarted,
            seed,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Execute one tick.
    ///
    /// # Errors
    ///
    /// [`EngineError::TrialComplete`] once `max_ticks` ticks have run.
    /// Diffusion, sensor or arena failures are passed through; none of
    /// them can occur for a grid built from the same config.
    pub fn step_sync(&mut self) -> Result<TickReport, EngineError> {
        match self.state {
            RunState::Complete => return Err(EngineError::TrialComplete),
            RunState::NotStarted => {
                info!(
                    trial = %self.id,
                    max_ticks = self.spec.max_ticks,
                    cells = self.grid.cell_count(),
                    seed = self.seed,
                    "trial started"
                );
                self.state = RunState::Running;
            }
            RunState::Running => {}
        }

        let tick_start = Instant::now();
        self.stepper.step(&mut self.grid)?;
        let diffusion_us = tick_start.elapsed().as_micros() as u64;

        let sample_start = Instant::now();
        let sampled = self.sensors.plan().is_sample_tick(self.ticks);
        let readings = self.sensors.sample(&self.grid, TickId(self.ticks))?;
        let sample_us = sample_start.elapsed().as_micros() as u64;

        let snapshot_start = Instant::now();
        self.snapshots.push(&self.grid)?;
        self.ticks += 1;
        let snapshot_us = snapshot_start.elapsed().as_micros() as u64;

        self.last_metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            diffusion_us,
            sample_us,
            snapshot_us,
            memory_bytes: self.snapshots.memory_bytes(),
        };

        if self.ticks >= self.spec.max_ticks {
            self.state = RunState::Complete;
            info!(
                trial = %self.id,
                ticks = self.ticks,
                memory_bytes = self.last_metrics.memory_bytes,
                "trial complete"
            );
        }

        Ok(TickReport {
            tick: TickId(self.ticks),
            readings,
            sampled,
            metrics: self.last_metrics.clone(),
        })
    }

    /// Step while `keep_going` returns `true` for the latest report.
    ///
    /// Returns the state after the last executed tick. Stops by itself
    /// when the trial completes.
    pub fn run_while<F>(&mut self, mut keep_going: F) -> Result<RunState, EngineError>
    where
        F: FnMut(&TickReport) -> bool,
    {
        while self.state != RunState::Complete {
            let report = self.step_sync()?;
            if !keep_going(&report) {
                break;
            }
        }
        Ok(self.state)
    }

    /// Step until the tick budget is exhausted.
    pub fn run_to_end(&mut self) -> Result<(), EngineError> {
        self.run_while(|_| true).map(|_| ())
    }

    /// Whether all `max_ticks` ticks have run.
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Complete
    }

    /// Lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sensors with the series recorded so far.
    pub fn sensors(&self) -> &Sensors {
        &self.sensors
    }

    /// Most recently recorded snapshot.
    pub fn latest_snapshot(&self) -> Option<Snapshot<'_>> {
        self.snapshots.latest()
    }

    /// Trial identifier.
    pub fn id(&self) -> &TrialId {
        &self.id
    }

    /// Initial conditions.
    pub fn params(&self) -> &TrialParams {
        &self.params
    }

    /// Visitation-order seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Finish the trial.
    ///
    /// # Errors
    ///
    /// [`EngineError::TrialIncomplete`] if fewer than `max_ticks` ticks
    /// have run.
    pub fn into_trial(self) -> Result<Trial, EngineError> {
        if self.state != RunState::Complete {
            return Err(EngineError::TrialIncomplete {
                ticks: self.ticks,
                max_ticks: self.spec.max_ticks,
            });
        }
        Ok(Trial::new(
            self.id,
            self.params,
            self.spec,
            self.cup,
            self.sensors,
            self.snapshots,
            self.seed,
            self.last_metrics,
        ))
    }
}

impl std::fmt::Debug for LiveTrial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveTrial")
            .field("id", &self.id)
            .field("ticks", &self.ticks)
            .field("state", &self.state)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
