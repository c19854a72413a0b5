//! Seeded trials reproduce bit for bit.

use cupheat_engine::{TemperatureLabel, TrialConfig, TrialParams, TrialRunner};
use cupheat_replay::{
    compare_trials, config_hash, replay_and_compare, trial_hash, trial_hashes, verify_trial,
    ReplayError,
};
use proptest::prelude::*;

fn runner(seed: u64) -> TrialRunner {
    TrialRunner::new(TrialConfig::reference().with_seed(seed)).unwrap()
}

fn params() -> TrialParams {
    TrialParams::labelled("Aluminum", TemperatureLabel::Hot, TemperatureLabel::Cold)
}

#[test]
fn same_seed_identical_trials() {
    let a = runner(42).run(params()).unwrap();
    let b = runner(42).run(params()).unwrap();
    assert_eq!(compare_trials(&a, &b).unwrap(), None);
    assert_eq!(trial_hash(&a), trial_hash(&b));
}

#[test]
fn different_seed_diverges_early() {
    let a = runner(1).run(params()).unwrap();
    let b = runner(2).run(params()).unwrap();
    let report = compare_trials(&a, &b).unwrap().unwrap();
    // visitation order differs from the first tick on
    assert_eq!(report.tick, 0);
    assert!(!report.divergences.is_empty());
    assert_ne!(trial_hash(&a), trial_hash(&b));
}

#[test]
fn unseeded_trial_verifies_from_recorded_seed() {
    let runner = TrialRunner::reference().unwrap();
    let trial = runner.run(params()).unwrap();
    assert_eq!(verify_trial(&runner, &trial).unwrap(), None);
}

#[test]
fn live_stepping_matches_recorded_hashes() {
    let recorded = trial_hashes(&runner(7).run(params()).unwrap());
    assert_eq!(recorded.len(), 900);

    let mut live = runner(7).start(params()).unwrap();
    let report = replay_and_compare(&recorded, |_| {
        live.step_sync()?;
        let snapshot = live.latest_snapshot().ok_or(ReplayError::LengthMismatch {
            recorded: recorded.len(),
            replayed: 0,
        })?;
        Ok(cupheat_replay::snapshot_hash(&snapshot))
    })
    .unwrap();
    assert_eq!(report, None);
}

#[test]
fn shorter_trial_is_a_length_mismatch() {
    let mut config = TrialConfig::reference().with_seed(3);
    config.spec.max_ticks = 60;
    let short = TrialRunner::new(config).unwrap().run(params()).unwrap();
    let full = runner(3).run(params()).unwrap();
    assert_eq!(
        compare_trials(&full, &short),
        Err(ReplayError::LengthMismatch {
            recorded: 900,
            replayed: 60
        })
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn any_seed_replays(seed in any::<u64>()) {
        let a = runner(seed).run(params()).unwrap();
        prop_assert_eq!(a.seed(), seed);
        let b = runner(seed).run(params()).unwrap();
        prop_assert_eq!(trial_hashes(&a), trial_hashes(&b));
        prop_assert_eq!(
            config_hash(a.spec(), a.seed()),
            config_hash(b.spec(), b.seed())
        );
    }
}
