pub mod config; // Engine settings and validation
pub mod dsp; // Per-tick generators
pub mod math; // Fixed-point, Sample trait, random source
pub mod params; // Host-facing parameter descriptors
pub mod sequencing; // Drum patterns, clock following
pub mod terrain; // Noise-terrain oscillator

pub use config::{ConfigError, EngineConfig, DEFAULT_SAMPLE_RATE};
pub use math::{Fixed, RandomSource, Sample, SampleFx};
