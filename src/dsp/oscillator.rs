#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::phasor::Phasor;
use super::shapes;
use crate::math::sample::clamp;
use crate::math::Sample;

/// Shape selected on an [`Oscillator`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    QuadraticSine,
    Saw,
    ReverseSaw,
    Square,
    Triangle,
    SharkTooth,
    SawBlep,
    SquareBlep,
    TriangleBlamp,
}

impl Waveform {
    pub const ALL: [Waveform; 10] = [
        Waveform::Sine,
        Waveform::QuadraticSine,
        Waveform::Saw,
        Waveform::ReverseSaw,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::SharkTooth,
        Waveform::SawBlep,
        Waveform::SquareBlep,
        Waveform::TriangleBlamp,
    ];

    /// Display names, in [`Waveform::ALL`] order.
    pub const NAMES: [&'static str; 10] = [
        "sine",
        "quad sine",
        "saw",
        "reverse saw",
        "square",
        "triangle",
        "shark tooth",
        "saw (blep)",
        "square (blep)",
        "triangle (blamp)",
    ];

    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Position in [`Waveform::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps out-of-range indices.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Whether the shape corrects its discontinuities.
    pub fn is_band_limited(self) -> bool {
        matches!(
            self,
            Waveform::SawBlep | Waveform::SquareBlep | Waveform::TriangleBlamp
        )
    }
}

/// A [`Phasor`] driving one of the waveshapers.
///
/// Dispatch is a plain `match` on the waveform, so every representation of
/// `T` gets its own inlined copy of the shapes.
#[derive(Debug, Clone)]
pub struct Oscillator<T: Sample> {
    phasor: Phasor<T>,
    waveform: Waveform,
    pulse_width: T, // fraction of the cycle spent high, square shapes only
    shape: T,       // shark tooth blend, 0 = triangle, 1 = saw
}

impl<T: Sample> Oscillator<T> {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            phasor: Phasor::new(sample_rate),
            waveform: Waveform::default(),
            pulse_width: T::from_ratio(1, 2),
            shape: T::from_ratio(1, 2),
        }
    }

    pub fn reset(&mut self, sample_rate: f32) {
        self.phasor.reset(sample_rate);
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.phasor.set_frequency(frequency);
    }

    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }

    /// Clamped to `[0, 1]`.
    pub fn set_pulse_width(&mut self, pulse_width: T) {
        self.pulse_width = clamp(pulse_width, T::ZERO, T::ONE);
    }

    /// Clamped to `[0, 1]`.
    pub fn set_shape(&mut self, shape: T) {
        self.shape = clamp(shape, T::ZERO, T::ONE);
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn phasor(&self) -> &Phasor<T> {
        &self.phasor
    }

    #[inline]
    pub fn tick(&mut self) -> T {
        let phase = self.phasor.tick();
        let inc = self.phasor.phase_increment();

        match self.waveform {
            Waveform::Sine => shapes::sine(phase),
            Waveform::QuadraticSine => shapes::quadratic_sine(phase),
            Waveform::Saw => shapes::saw(phase),
            Waveform::ReverseSaw => shapes::reverse_saw(phase),
            Waveform::Square => shapes::rect(phase, self.pulse_width),
            Waveform::Triangle => shapes::triangle(phase),
            Waveform::SharkTooth => shapes::shark_tooth(phase, self.shape),
            Waveform::SawBlep => shapes::saw_poly_blep(phase, inc),
            Waveform::SquareBlep => {
                // Keep both edges at least one increment apart.
                let width = clamp(self.pulse_width, inc, T::ONE - inc);
                shapes::rect_poly_blep(phase, inc, width)
            }
            Waveform::TriangleBlamp => shapes::triangle_poly_blamp(phase, inc),
        }
    }
}
