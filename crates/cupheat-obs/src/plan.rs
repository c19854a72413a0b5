//! When to sample and how ticks map onto the trial clock.

use serde::{Deserialize, Serialize};

use crate::error::ObsError;

/// Down-sampling schedule for recorded series.
///
/// A tick `t` is sampled when `t % sample_interval == 0`; its point is
/// placed at `t / max_ticks * duration_minutes` on the time axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplingPlan {
    /// Ticks between recorded points.
    pub sample_interval: u64,
    /// Ticks in a complete trial.
    pub max_ticks: u64,
    /// Length of a complete trial on the time axis, in minutes.
    pub duration_minutes: f64,
}

impl SamplingPlan {
    /// Every 30th tick of 900, mapped onto 60 minutes.
    pub fn reference() -> Self {
        Self {
            sample_interval: 30,
            max_ticks: 900,
            duration_minutes: 60.0,
        }
    }

    /// Check that the plan can be evaluated.
    pub fn validate(&self) -> Result<(), ObsError> {
        if self.sample_interval == 0 {
            return Err(ObsError::InvalidPlan {
                reason: "sample_interval must be at least 1".into(),
            });
        }
        if self.max_ticks == 0 {
            return Err(ObsError::InvalidPlan {
                reason: "max_ticks must be at least 1".into(),
            });
        }
        if !self.duration_minutes.is_finite() || self.duration_minutes <= 0.0 {
            return Err(ObsError::InvalidPlan {
                reason: format!(
                    "duration_minutes must be finite and positive, got {}",
                    self.duration_minutes
                ),
            });
        }
        Ok(())
    }

    /// Whether `tick` produces a series point.
    pub fn is_sample_tick(&self, tick: u64) -> bool {
        tick % self.sample_interval == 0
    }

    /// Position of `tick` on the time axis, in minutes.
    pub fn minutes_at(&self, tick: u64) -> f64 {
        tick as f64 / self.max_ticks as f64 * self.duration_minutes
    }

    /// Number of series points recorded at or before `tick`.
    pub fn points_through(&self, tick: u64) -> usize {
        (tick / self.sample_interval) as usize + 1
    }

    /// Points a complete trial records per series.
    pub fn points_per_trial(&self) -> usize {
        self.max_ticks.div_ceil(self.sample_interval) as usize
    }

    /// Latest sampled tick at or before `tick`.
    pub fn closest_sample_tick(&self, tick: u64) -> u64 {
        tick / self.sample_interval * self.sample_interval
    }
}

impl Default for SamplingPlan {
    fn default() -> Self {
        Self::reference()
    }
}
