//! Hashing utilities for snapshot and configuration comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks during replay comparison.

use cupheat_core::{GridSpec, TemperatureField};
use cupheat_engine::Trial;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash every temperature, conductivity and cell kind of `field`.
///
/// Temperatures and conductivities are hashed by `f64::to_bits()`, so
/// `0.0` and `-0.0` differ. A section tag is folded in before each
/// column so a value cannot shift from one column to the next unnoticed.
pub fn snapshot_hash<F: TemperatureField + ?Sized>(field: &F) -> u64 {
    let mut hash = FNV_OFFSET;

    hash = fnv1a_u64(hash, 0);
    for &t in field.temperatures() {
        hash = fnv1a_u64(hash, t.to_bits());
    }
    hash = fnv1a_u64(hash, 1);
    for &k in field.conductivities() {
        hash = fnv1a_u64(hash, k.to_bits());
    }
    hash = fnv1a_u64(hash, 2);
    for &kind in field.kinds() {
        hash = fnv1a_byte(hash, kind as u8);
    }

    hash
}

/// Per-tick snapshot hashes of `trial`, in tick order.
pub fn trial_hashes(trial: &Trial) -> Vec<u64> {
    trial
        .snapshots()
        .iter()
        .map(|s| snapshot_hash(&s))
        .collect()
}

/// One hash over every snapshot and every recorded series of `trial`.
pub fn trial_hash(trial: &Trial) -> u64 {
    let mut hash = FNV_OFFSET;
    for (tick, h) in trial_hashes(trial).into_iter().enumerate() {
        hash = fnv1a_u64(hash, tick as u64);
        hash = fnv1a_u64(hash, h);
    }
    for series in trial.series() {
        for &b in series.label.as_bytes() {
            hash = fnv1a_byte(hash, b);
        }
        for p in &series.points {
            hash = fnv1a_u64(hash, p.time.to_bits());
            hash = fnv1a_u64(hash, p.temperature.to_bits());
        }
    }
    hash
}

/// Hash of the grid configuration and seed.
///
/// Two runs can only be bit-identical when this matches.
pub fn config_hash(spec: &GridSpec, seed: u64) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, seed);
    for bound in [spec.min_x, spec.max_x, spec.min_y, spec.max_y] {
        hash = fnv1a_u64(hash, bound as i64 as u64);
    }
    for scalar in [
        spec.temperature_min,
        spec.temperature_max,
        spec.flow_speed,
        spec.update_rate,
    ] {
        hash = fnv1a_u64(hash, scalar.to_bits());
    }
    fnv1a_u64(hash, spec.max_ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupheat_test_utils::{fixtures, MockField};

    #[test]
    fn same_data_same_hash() {
        let a = MockField::new(vec![1.0, 2.0, 3.0]);
        let b = MockField::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(snapshot_hash(&a), snapshot_hash(&b));
    }

    #[test]
    fn different_data_different_hash() {
        let a = MockField::new(vec![1.0, 2.0, 3.0]);
        let b = MockField::new(vec![1.0, 2.0, 4.0]);
        assert_ne!(snapshot_hash(&a), snapshot_hash(&b));
    }

    #[test]
    fn signed_zero_distinguished() {
        let a = MockField::new(vec![0.0]);
        let b = MockField::new(vec![-0.0]);
        assert_ne!(snapshot_hash(&a), snapshot_hash(&b));
    }

    #[test]
    fn cell_kinds_are_hashed() {
        let air = fixtures::uniform(fixtures::small_spec(21, 31), 5.0);
        let cup = fixtures::reference_world("Aluminum", 5.0, 5.0);
        // same temperatures everywhere, different materials
        assert_ne!(snapshot_hash(&air), snapshot_hash(&cup));
    }

    #[test]
    fn config_hash_tracks_seed_and_spec() {
        let spec = GridSpec::reference();
        assert_eq!(config_hash(&spec, 1), config_hash(&spec, 1));
        assert_ne!(config_hash(&spec, 1), config_hash(&spec, 2));
        let mut other = spec.clone();
        other.flow_speed = 2.0;
        assert_ne!(config_hash(&spec, 1), config_hash(&other, 1));
    }
}
