//! Benchmarks for single generators.

mod envelope;
mod fixed;
mod noise;
mod oscillator;

pub use envelope::bench_envelope;
pub use fixed::bench_fixed;
pub use noise::bench_noise;
pub use oscillator::bench_oscillator;
