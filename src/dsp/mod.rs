//! Per-tick signal generators.
//!
//! Everything in here is allocation-free and produces exactly one value per
//! `tick()`. The types are generic over [`Sample`](crate::math::Sample) and
//! hold their whole state by value, so they can be embedded directly inside
//! a host's channel structs.

/// Attack/decay envelopes, slew limiter and exponential segment.
pub mod envelope;
/// 3-D gradient noise over the reference permutation.
pub mod noise;
/// Phasor front-end selecting one of the waveshapers.
pub mod oscillator;
/// Phase accumulator and wrap detection.
pub mod phasor;
/// Linear ramp toward a target over a fixed tick count.
pub mod ramp;
/// Pure waveshaping functions of phase.
pub mod shapes;

pub use envelope::{AdEnvelope, ExpSegment, LinearAdEnvelope, Slew};
pub use noise::{FadeCurve, NoiseField};
pub use oscillator::{Oscillator, Waveform};
pub use phasor::{Phasor, WrapDetector};
pub use ramp::RampedValue;
