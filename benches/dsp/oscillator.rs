//! Benchmarks for oscillator waveforms.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tickwave::dsp::{Oscillator, Waveform};
use tickwave::{Sample, SampleFx};

use crate::{SAMPLE_RATE, TICK_COUNTS};

fn render<T: Sample>(osc: &mut Oscillator<T>, buffer: &mut [T]) {
    for out in buffer.iter_mut() {
        *out = osc.tick();
    }
}

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &ticks in TICK_COUNTS {
        let mut buffer = vec![0.0f32; ticks];
        let mut fixed_buffer = vec![SampleFx::ZERO; ticks];

        for waveform in Waveform::ALL {
            let mut osc = Oscillator::<f32>::new(SAMPLE_RATE);
            osc.set_frequency(440.0);
            osc.set_waveform(waveform);
            group.bench_with_input(BenchmarkId::new(waveform.name(), ticks), &ticks, |b, _| {
                b.iter(|| render(black_box(&mut osc), black_box(&mut buffer)))
            });
        }

        // Fixed point: the sine polynomial and the band-limited saw
        for waveform in [Waveform::Sine, Waveform::SawBlep] {
            let mut osc = Oscillator::<SampleFx>::new(SAMPLE_RATE);
            osc.set_frequency(440.0);
            osc.set_waveform(waveform);
            group.bench_with_input(
                BenchmarkId::new(format!("{} (fixed)", waveform.name()), ticks),
                &ticks,
                |b, _| b.iter(|| render(black_box(&mut osc), black_box(&mut fixed_buffer))),
            );
        }
    }

    group.finish();
}
