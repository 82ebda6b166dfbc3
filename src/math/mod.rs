//! Numeric foundations shared by every generator.
//!
//! Everything here is `Copy`, allocation-free and deterministic, so the same
//! generator code runs on floats during development and on fixed-point on
//! the target.

/// Scaled-integer arithmetic with explicit wrap and saturate semantics.
pub mod fixed;
/// Deterministic LCG producing uniform values in typed ranges.
pub mod random;
/// The `Sample` trait and small generic helpers (`lerp`, `clamp`, ...).
pub mod sample;

pub use fixed::{Fixed, SampleFx};
pub use random::RandomSource;
pub use sample::Sample;
