//! Snapshot comparison and replay verification.
//!
//! Hash-first comparison (fast path) with a per-cell bit-exact fallback
//! on mismatch, plus a driver that replays any stepping closure against
//! recorded hashes.

use cupheat_core::TemperatureField;
use cupheat_engine::{Trial, TrialRunner};

use crate::error::ReplayError;
use crate::hash::snapshot_hash;

/// One cell whose temperature differs between two runs.
#[derive(Clone, Debug, PartialEq)]
pub struct CellDivergence {
    /// Flat cell index.
    pub cell_index: usize,
    /// Temperature in the recorded run.
    pub recorded: f64,
    /// Temperature in the replayed run.
    pub replayed: f64,
}

/// Every divergence found at a single tick.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergenceReport {
    /// Snapshot index at which divergence was detected.
    pub tick: u64,
    /// Differing cells. Empty when only a hash was available.
    pub divergences: Vec<CellDivergence>,
}

/// Compare `replayed` against a recorded hash.
///
/// Returns `None` when the hashes match. On mismatch, and if the
/// recorded field is at hand, every cell whose temperature bits differ
/// is listed.
pub fn compare_snapshot<A, B>(
    replayed: &A,
    recorded_hash: u64,
    tick: u64,
    recorded: Option<&B>,
) -> Result<Option<DivergenceReport>, ReplayError>
where
    A: TemperatureField + ?Sized,
    B: TemperatureField + ?Sized,
{
    if snapshot_hash(replayed) == recorded_hash {
        return Ok(None);
    }

    let mut divergences = Vec::new();
    if let Some(recorded) = recorded {
        let (rec, rep) = (recorded.temperatures(), replayed.temperatures());
        if rec.len() != rep.len() {
            return Err(ReplayError::CellCountMismatch {
                recorded: rec.len(),
                replayed: rep.len(),
            });
        }
        for (i, (&r, &p)) in rec.iter().zip(rep).enumerate() {
            if r.to_bits() != p.to_bits() {
                divergences.push(CellDivergence {
                    cell_index: i,
                    recorded: r,
                    replayed: p,
                });
            }
        }
    }

    Ok(Some(DivergenceReport { tick, divergences }))
}

/// Find the first tick at which two finished trials differ.
///
/// `None` means every snapshot is bit-identical.
pub fn compare_trials(
    recorded: &Trial,
    replayed: &Trial,
) -> Result<Option<DivergenceReport>, ReplayError> {
    if recorded.len() != replayed.len() {
        return Err(ReplayError::LengthMismatch {
            recorded: recorded.len(),
            replayed: replayed.len(),
        });
    }
    for (rec, rep) in recorded.snapshots().iter().zip(replayed.snapshots().iter()) {
        let tick = rec.index() as u64;
        if let Some(report) = compare_snapshot(&rep, snapshot_hash(&rec), tick, Some(&rec))? {
            return Ok(Some(report));
        }
    }
    Ok(None)
}

/// Step a run through `step_fn` once per recorded hash and stop at the
/// first mismatch.
///
/// `step_fn` receives the tick index, advances the run, and returns the
/// hash of the resulting state. Only the tick is reported, since the
/// closure yields no cell data.
pub fn replay_and_compare<F>(
    recorded: &[u64],
    mut step_fn: F,
) -> Result<Option<DivergenceReport>, ReplayError>
where
    F: FnMut(u64) -> Result<u64, ReplayError>,
{
    for (tick, &expected) in recorded.iter().enumerate() {
        let tick = tick as u64;
        if step_fn(tick)? != expected {
            return Ok(Some(DivergenceReport {
                tick,
                divergences: vec![],
            }));
        }
    }
    Ok(None)
}

/// Rerun `trial` from its seed and initial conditions under `runner`'s
/// configuration, then compare every tick.
pub fn verify_trial(
    runner: &TrialRunner,
    trial: &Trial,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let config = runner.config().clone().with_seed(trial.seed());
    let rerun = TrialRunner::new(config)
        .map_err(|e| ReplayError::Engine(e.into()))?
        .run(trial.params().clone())?;
    compare_trials(trial, &rerun)
}
