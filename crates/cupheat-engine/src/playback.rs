//! Cursor over a finished trial.
//!
//! [`Playback`] answers the questions a viewer asks while scrubbing or
//! replaying: which snapshot is showing, how many minutes that is, which
//! sampled tick to report, and whether the viewer has reached the end of
//! the trial at least once.

use cupheat_arena::Snapshot;

use crate::error::EngineError;
use crate::state::{export_tick_state, export_tick_state_highlighting, TickState};
use crate::trial::Trial;

/// Playback position within a [`Trial`].
///
/// Completion is sticky: once the cursor enters the last sampling window
/// it stays complete, even after seeking back.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'t> {
    trial: &'t Trial,
    tick: u64,
    completed: bool,
}

impl<'t> Playback<'t> {
    /// Cursor at tick 0.
    pub fn new(trial: &'t Trial) -> Self {
        Self {
            trial,
            tick: 0,
            completed: false,
        }
    }

    /// Cursor at tick 0 for a trial the viewer already finished once.
    pub fn completed(trial: &'t Trial) -> Self {
        Self {
            completed: true,
            ..Self::new(trial)
        }
    }

    /// The trial being played.
    pub fn trial(&self) -> &'t Trial {
        self.trial
    }

    /// Current snapshot index.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether the viewer has reached the last sampling window.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Snapshot under the cursor.
    pub fn snapshot(&self) -> Result<Snapshot<'t>, EngineError> {
        self.trial.try_snapshot(self.tick)
    }

    /// Move the cursor to `tick`.
    pub fn seek(&mut self, tick: u64) -> Result<Snapshot<'t>, EngineError> {
        let snapshot = self.trial.try_snapshot(tick)?;
        self.tick = tick;
        if tick >= self.last_window_start() {
            self.completed = true;
        }
        Ok(snapshot)
    }

    /// Move the cursor to `fraction` of the way through the trial.
    ///
    /// `fraction` is clamped to `[0, 1]`; the tick is
    /// `floor(fraction * (len - 1))`.
    pub fn seek_fraction(&mut self, fraction: f64) -> Result<Snapshot<'t>, EngineError> {
        self.seek(tick_from_fraction(fraction, self.trial.len()))
    }

    /// Step forward one tick. `None` at the last snapshot.
    pub fn advance(&mut self) -> Option<Snapshot<'t>> {
        let next = self.tick + 1;
        self.seek(next).ok()
    }

    /// Back to tick 0, keeping the completion flag.
    pub fn rewind(&mut self) {
        self.tick = 0;
    }

    /// Elapsed trial time in whole minutes, rounded up.
    pub fn minutes_played(&self) -> u64 {
        let plan = self.trial.plan();
        (self.tick as f64 / plan.max_ticks as f64 * plan.duration_minutes).ceil() as u64
    }

    /// Latest sampled tick at or before the cursor.
    pub fn closest_sample_tick(&self) -> u64 {
        self.trial.plan().closest_sample_tick(self.tick)
    }

    /// Whether the cursor sits on a sampled tick.
    pub fn on_sample_tick(&self) -> bool {
        self.trial.plan().is_sample_tick(self.tick)
    }

    /// Tick state for the closest sampled tick.
    ///
    /// A completed playback exports the full series and highlights the
    /// cursor position instead.
    pub fn export(&self) -> Result<TickState, EngineError> {
        let tick = self.closest_sample_tick();
        if self.completed {
            export_tick_state_highlighting(self.trial, self.last_window_start(), tick)
        } else {
            export_tick_state(self.trial, tick)
        }
    }

    fn last_window_start(&self) -> u64 {
        let plan = self.trial.plan();
        plan.max_ticks.saturating_sub(plan.sample_interval)
    }
}

/// `floor(fraction * (len - 1))`, with `fraction` clamped to `[0, 1]`.
pub fn tick_from_fraction(fraction: f64, len: usize) -> u64 {
    let last = len.saturating_sub(1) as f64;
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (fraction * last).floor() as u64
}
