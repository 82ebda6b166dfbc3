//! Benchmarks for envelopes and ramps.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tickwave::dsp::{AdEnvelope, ExpSegment, LinearAdEnvelope, RampedValue};

use crate::TICK_COUNTS;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &ticks in TICK_COUNTS {
        let mut buffer = vec![0.0f32; ticks];

        // Retriggered every block so the attack path is included
        let mut env = AdEnvelope::<f32>::new();
        env.set_slopes(20, 400);
        group.bench_with_input(BenchmarkId::new("ad", ticks), &ticks, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = env.tick(black_box(i == 0));
                }
            })
        });

        let mut env = LinearAdEnvelope::<f32>::new();
        env.set_slopes(20, 400);
        group.bench_with_input(BenchmarkId::new("linear_ad", ticks), &ticks, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = env.tick(black_box(i == 0));
                }
            })
        });

        let mut segment = ExpSegment::<f32>::new();
        group.bench_with_input(BenchmarkId::new("exp_segment", ticks), &ticks, |b, _| {
            b.iter(|| {
                segment.start(1.0, 0.0, ticks as u32);
                for out in buffer.iter_mut() {
                    *out = segment.tick();
                }
            })
        });

        let mut ramp = RampedValue::<f32>::new(0.0);
        group.bench_with_input(BenchmarkId::new("ramp", ticks), &ticks, |b, _| {
            b.iter(|| {
                ramp.set_value(0.0);
                ramp.ramp_to(black_box(1.0), ticks as u64);
                for out in buffer.iter_mut() {
                    *out = ramp.tick();
                }
            })
        });
    }

    group.finish();
}
