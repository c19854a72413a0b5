//! Criterion benchmarks for single ticks and complete trials.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use cupheat_bench::{reference_params, reference_profile, stress_profile};
use cupheat_engine::TrialRunner;
use cupheat_propagators::DiffusionStepper;

fn bench_tick_reference(c: &mut Criterion) {
    let runner = TrialRunner::new(reference_profile(42)).unwrap();
    let mut grid = runner.build_grid(&reference_params()).unwrap();
    let mut stepper = DiffusionStepper::builder()
        .spec(runner.config().spec.clone())
        .seed(42)
        .build()
        .unwrap();

    c.bench_function("tick_651", |b| {
        b.iter(|| {
            stepper.step(&mut grid).unwrap();
            black_box(&grid);
        });
    });
}

fn bench_tick_stress(c: &mut Criterion) {
    let runner = TrialRunner::new(stress_profile(42)).unwrap();
    let mut grid = runner.build_grid(&reference_params()).unwrap();
    let mut stepper = DiffusionStepper::builder()
        .spec(runner.config().spec.clone())
        .seed(42)
        .build()
        .unwrap();

    c.bench_function("tick_15k", |b| {
        b.iter(|| {
            stepper.step(&mut grid).unwrap();
            black_box(&grid);
        });
    });
}

fn bench_full_trial_reference(c: &mut Criterion) {
    let runner = TrialRunner::new(reference_profile(42)).unwrap();
    c.bench_function("trial_900_ticks_651", |b| {
        b.iter(|| {
            let trial = runner.run(reference_params()).unwrap();
            black_box(trial.len());
        });
    });
}

fn bench_live_step(c: &mut Criterion) {
    let runner = TrialRunner::new(reference_profile(42)).unwrap();
    c.bench_function("live_step_sync_900", |b| {
        b.iter(|| {
            let mut live = runner.start(reference_params()).unwrap();
            while !live.is_complete() {
                let report = live.step_sync().unwrap();
                black_box(&report);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tick_reference,
    bench_tick_stress,
    bench_full_trial_reference,
    bench_live_step
);
criterion_main!(benches);
