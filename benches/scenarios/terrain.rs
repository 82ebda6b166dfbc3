//! Benchmarks for the terrain oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tickwave::config::TerrainConfig;
use tickwave::dsp::Phasor;
use tickwave::terrain::TerrainOscillator;
use tickwave::{Sample, SampleFx};

use crate::{SAMPLE_RATE, TICK_COUNTS};

fn render<T: Sample>(osc: &mut TerrainOscillator<T>, phasor: &mut Phasor<T>, buffer: &mut [T]) {
    for out in buffer.iter_mut() {
        *out = osc.tick(phasor.tick());
    }
}

/// Run until the first geometry is measured and faded in.
fn settle<T: Sample>(osc: &mut TerrainOscillator<T>, phasor: &mut Phasor<T>) {
    let mut scratch = vec![T::ZERO; 256];
    for _ in 0..40 {
        render(osc, phasor, &mut scratch);
    }
}

pub fn bench_terrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/terrain");
    let config = TerrainConfig::default();

    for &ticks in TICK_COUNTS {
        let mut buffer = vec![0.0f32; ticks];

        // Steady: one geometry, no evaluation running
        let mut osc = TerrainOscillator::<f32>::new(&config);
        let mut phasor = Phasor::new(SAMPLE_RATE);
        phasor.set_frequency(220.0);
        osc.set_parameters(0.3, 1.2, 0.4, 2.0);
        settle(&mut osc, &mut phasor);
        group.bench_with_input(BenchmarkId::new("steady", ticks), &ticks, |b, _| {
            b.iter(|| render(black_box(&mut osc), &mut phasor, black_box(&mut buffer)))
        });

        // Sweeping: a new geometry every block keeps the evaluator busy
        let mut osc = TerrainOscillator::<f32>::new(&config);
        let mut phasor = Phasor::new(SAMPLE_RATE);
        phasor.set_frequency(220.0);
        let mut x = 0.0f32;
        group.bench_with_input(BenchmarkId::new("sweeping", ticks), &ticks, |b, _| {
            b.iter(|| {
                x += 0.01;
                osc.set_parameters(0.3, x, 0.4, 2.0);
                render(black_box(&mut osc), &mut phasor, black_box(&mut buffer))
            })
        });

        let mut fixed_buffer = vec![SampleFx::ZERO; ticks];
        let mut osc = TerrainOscillator::<SampleFx>::new(&config);
        let mut phasor = Phasor::new(SAMPLE_RATE);
        phasor.set_frequency(220.0);
        osc.set_parameters(
            SampleFx::from_f32(0.3),
            SampleFx::from_f32(1.2),
            SampleFx::from_f32(0.4),
            SampleFx::from_int(2),
        );
        settle(&mut osc, &mut phasor);
        group.bench_with_input(BenchmarkId::new("steady (fixed)", ticks), &ticks, |b, _| {
            b.iter(|| render(black_box(&mut osc), &mut phasor, black_box(&mut fixed_buffer)))
        });
    }

    group.finish();
}
