//! Full reference trials through the public engine API.

use cupheat_core::{CellKind, Coord, TemperatureField};
use cupheat_engine::{
    export_tick_state, EngineError, TemperatureLabel, TrialConfig, TrialParams, TrialRunner,
};
use cupheat_test_utils::fixtures;
use proptest::prelude::*;

fn runner(seed: u64) -> TrialRunner {
    TrialRunner::new(TrialConfig::reference().with_seed(seed)).unwrap()
}

fn labelled(material: &str, bev: TemperatureLabel, air: TemperatureLabel) -> TrialParams {
    TrialParams::labelled(material, bev, air)
}

#[test]
fn aluminum_hot_beverage_cold_air() {
    let trial = runner(42)
        .run(labelled("Aluminum", TemperatureLabel::Hot, TemperatureLabel::Cold))
        .unwrap();
    assert_eq!(trial.len(), 900);

    let last = trial.readings_at(899).unwrap();
    let beverage = last.iter().find(|r| r.label == "beverage").unwrap();
    let air = last.iter().find(|r| r.label == "air").unwrap();
    assert!(beverage.temperature < 90.0, "beverage {}", beverage.temperature);
    assert!(beverage.temperature > 5.0, "beverage {}", beverage.temperature);
    assert!(air.temperature > 5.0, "air {}", air.temperature);
}

#[test]
fn liquid_mean_moves_toward_air() {
    for (bev, air) in [
        (TemperatureLabel::Hot, TemperatureLabel::Cold),
        (TemperatureLabel::Cold, TemperatureLabel::Hot),
        (TemperatureLabel::Warm, TemperatureLabel::Cold),
    ] {
        let trial = runner(7).run(labelled("Wood", bev, air)).unwrap();
        let start = bev.celsius();
        let end = trial
            .snapshot(899)
            .unwrap()
            .mean_temperature(CellKind::Liquid)
            .unwrap();
        let toward_air = (air.celsius() - start).signum();
        assert!(
            (end - start) * toward_air > 0.0,
            "{bev}->{air}: liquid mean {end} did not move toward air"
        );
    }
}

#[test]
fn same_seed_same_trial() {
    let params = labelled("Styrofoam", TemperatureLabel::Hot, TemperatureLabel::Warm);
    let a = runner(99).run(params.clone()).unwrap();
    let b = runner(99).run(params).unwrap();
    for tick in [0, 1, 450, 899] {
        assert_eq!(
            a.snapshot(tick).unwrap().temperatures(),
            b.snapshot(tick).unwrap().temperatures()
        );
    }
    assert_eq!(a.series(), b.series());
}

#[test]
fn different_seeds_diverge() {
    let params = labelled("Clay", TemperatureLabel::Hot, TemperatureLabel::Cold);
    let a = runner(1).run(params.clone()).unwrap();
    let b = runner(2).run(params).unwrap();
    assert_ne!(
        a.snapshot(899).unwrap().temperatures(),
        b.snapshot(899).unwrap().temperatures()
    );
}

#[test]
fn unseeded_trials_record_their_seed() {
    let params = labelled("Glass", TemperatureLabel::Hot, TemperatureLabel::Cold);
    let first = TrialRunner::reference().unwrap().run(params.clone()).unwrap();
    let replay = runner(first.seed()).run(params).unwrap();
    assert_eq!(
        first.snapshot(899).unwrap().temperatures(),
        replay.snapshot(899).unwrap().temperatures()
    );
}

#[test]
fn prepared_grid_is_accepted() {
    let grid = fixtures::aluminum_hot_cold();
    let params = labelled("Aluminum", TemperatureLabel::Hot, TemperatureLabel::Cold);
    let trial = runner(5).run_trial(grid, params).unwrap();
    assert_eq!(
        trial.snapshot(0).unwrap().cell(Coord::new(-6, -8)).unwrap().kind,
        CellKind::Wall
    );
}

#[test]
fn mismatched_grid_rejected() {
    let grid = fixtures::uniform(fixtures::small_spec(4, 4), 20.0);
    let err = runner(5)
        .run_trial(grid, TrialParams::new(None, None, 20.0))
        .unwrap_err();
    assert!(matches!(err, EngineError::Arena(_)));
}

#[test]
fn exported_json_shape() {
    let trial = runner(3)
        .run(labelled("Plastic", TemperatureLabel::Warm, TemperatureLabel::Cold))
        .unwrap();
    let json = serde_json::to_value(export_tick_state(&trial, 870).unwrap()).unwrap();
    assert_eq!(json["trial"]["id"], "Plastic-WarmBev-ColdAir");
    assert_eq!(json["trial"]["series"][0]["data"].as_array().unwrap().len(), 30);
    assert_eq!(json["isTrialCompleted"], true);
    assert_eq!(json["airInitialTemperature"], 5.0);
    assert_eq!(json["showTooltipOnX"], 58.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn every_material_stays_clamped(
        material in prop::sample::select(vec!["Aluminum", "Wood", "Styrofoam", "Clay", "Glass", "Plastic"]),
        bev in prop::sample::select(TemperatureLabel::ALL.to_vec()),
        air in prop::sample::select(TemperatureLabel::ALL.to_vec()),
        seed in any::<u64>(),
    ) {
        let trial = runner(seed).run(labelled(material, bev, air)).unwrap();
        prop_assert_eq!(trial.len(), 900);
        prop_assert_eq!(trial.series_for("beverage").unwrap().len(), 30);
        let spec = trial.spec();
        for snapshot in trial.snapshots().iter() {
            for t in snapshot.temperatures() {
                prop_assert!(*t >= spec.temperature_min && *t <= spec.temperature_max);
            }
        }
    }
}
