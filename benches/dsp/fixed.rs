//! Benchmarks for fixed-point arithmetic against f32.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tickwave::dsp::shapes;
use tickwave::SampleFx;

use crate::TICK_COUNTS;

pub fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fixed");

    for &ticks in TICK_COUNTS {
        let floats: Vec<f32> = (0..ticks).map(|i| i as f32 / ticks as f32).collect();
        let fixed: Vec<SampleFx> = floats.iter().map(|&x| SampleFx::from_f32(x)).collect();

        group.bench_with_input(BenchmarkId::new("mul_add/f32", ticks), &ticks, |b, _| {
            b.iter(|| {
                floats
                    .iter()
                    .fold(0.0f32, |acc, &x| acc * black_box(0.5) + x * x)
            })
        });

        group.bench_with_input(BenchmarkId::new("mul_add/fixed", ticks), &ticks, |b, _| {
            let half = SampleFx::from_ratio(1, 2);
            b.iter(|| {
                fixed
                    .iter()
                    .fold(SampleFx::ZERO, |acc, &x| acc * black_box(half) + x * x)
            })
        });

        group.bench_with_input(BenchmarkId::new("sin_cos/fixed", ticks), &ticks, |b, _| {
            b.iter(|| {
                fixed.iter().fold(SampleFx::ZERO, |acc, &phase| {
                    let (s, c) = shapes::quadratic_sin_cos(black_box(phase));
                    acc + s * c
                })
            })
        });
    }

    group.finish();
}
