//! Benchmarks for the gradient noise field.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tickwave::dsp::{FadeCurve, NoiseField};
use tickwave::SampleFx;

use crate::TICK_COUNTS;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &ticks in TICK_COUNTS {
        let step = 1.0 / ticks as f32;

        for (name, fade) in [("hermite", FadeCurve::Hermite), ("quintic", FadeCurve::Quintic)] {
            let field = NoiseField::new(fade);
            group.bench_with_input(BenchmarkId::new(name, ticks), &ticks, |b, &ticks| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for i in 0..ticks {
                        let t = i as f32 * step;
                        acc += field.calc(black_box(t * 3.0), black_box(1.5 - t), black_box(0.25));
                    }
                    acc
                })
            });
        }

        let field = NoiseField::default();
        group.bench_with_input(BenchmarkId::new("hermite (fixed)", ticks), &ticks, |b, &ticks| {
            b.iter(|| {
                let mut acc = SampleFx::ZERO;
                for i in 0..ticks {
                    let t = SampleFx::from_f32(i as f32 * step);
                    acc = acc + field.calc(black_box(t), black_box(SampleFx::ONE - t), SampleFx::ZERO);
                }
                acc
            })
        });
    }

    group.finish();
}
