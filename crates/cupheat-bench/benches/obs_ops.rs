//! Criterion micro-benchmarks for thermometer sampling and series lookups.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use cupheat_core::{GridSpec, TickId};
use cupheat_obs::{Sensors, Series, SeriesPoint};
use cupheat_space::Lattice;
use cupheat_test_utils::fixtures;

fn bench_sample(c: &mut Criterion) {
    let grid = fixtures::aluminum_hot_cold();
    let lattice = Lattice::from_spec(&GridSpec::reference()).unwrap();

    c.bench_function("sensors_sample_900", |b| {
        b.iter(|| {
            let mut sensors = Sensors::reference(&lattice).unwrap();
            for tick in 0..900 {
                black_box(sensors.sample(&grid, TickId(tick)).unwrap());
            }
        });
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let mut series = Series::new("beverage");
    for k in 0..30 {
        series.push(SeriesPoint::new(2.0 * k as f64, 90.0 - k as f64));
    }

    c.bench_function("series_temperature_at", |b| {
        b.iter(|| black_box(series.temperature_at(black_box(37.3))));
    });
}

criterion_group!(benches, bench_sample, bench_interpolate);
criterion_main!(benches);
