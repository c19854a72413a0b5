//! Per-tick timing metrics.
//!
//! [`StepMetrics`] captures where the time of a single tick went, for
//! profiling and benchmark reporting.

/// Timing collected during a single tick.
///
/// All durations are in microseconds. The engine populates these fields
/// after each tick; a finished trial keeps the last one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent in the diffusion update, in microseconds.
    pub diffusion_us: u64,
    /// Time spent reading thermometers, in microseconds.
    pub sample_us: u64,
    /// Time spent copying the snapshot, in microseconds.
    pub snapshot_us: u64,
    /// Memory used by recorded snapshots after the tick, in bytes.
    pub memory_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.diffusion_us, 0);
        assert_eq!(m.sample_us, 0);
        assert_eq!(m.snapshot_us, 0);
        assert_eq!(m.memory_bytes, 0);
    }
}
