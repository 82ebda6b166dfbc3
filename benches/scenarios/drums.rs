//! Benchmarks for pattern lookups and gate generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tickwave::config::PatternConfig;
use tickwave::sequencing::{FlipFlopWeaver, PatternEngine, Selector};
use tickwave::RandomSource;

pub fn bench_drums(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/drums");

    // A full pattern cycle, all three channels, at a blended map position
    let mut engine = PatternEngine::with_random(&PatternConfig::default(), RandomSource::new(7));
    engine.set_chaos(128);
    group.bench_function("pattern_cycle", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for _ in 0..engine.length() {
                for selector in Selector::ALL {
                    if engine.trigger(selector, black_box(97), black_box(181), black_box(160)) {
                        hits += 1;
                    }
                }
                engine.advance();
            }
            hits
        })
    });

    let mut weaver = FlipFlopWeaver::new(RandomSource::new(7));
    for &size in &[16usize, 32, 64] {
        group.bench_with_input(BenchmarkId::new("flip_flop", size), &size, |b, &size| {
            b.iter(|| weaver.generate(black_box(size), black_box(4), black_box(0.5)))
        });
    }

    group.finish();
}
