use crate::math::Sample;

/*
Phasor
======

A phasor is a ramp that climbs from 0 to 1 and wraps back to 0, once per
oscillator period. Every other oscillator in this crate is a pure function of
this ramp, so all of the frequency handling lives here.

  1 ┐    ╱│   ╱│   ╱│
    │   ╱ │  ╱ │  ╱ │
    │  ╱  │ ╱  │ ╱  │
  0 └─╱───┴╱───┴╱───┴──→ ticks

    phase_increment = frequency / sample_rate
    phase           = frac(phase + phase_increment)

Changing the frequency only changes the increment, never the phase, so
there is no click on pitch changes.

Wrap detection compares the new phase with the previous one: a wrap is the
only moment the phase goes down.
*/

/// Reports phase wraparounds of an externally driven phase.
///
/// A wrap is a drop of more than half a cycle. Small backward steps (a
/// reversed or jittery clock) are not reported as wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct WrapDetector<T: Sample> {
    last: T,
}

impl<T: Sample> WrapDetector<T> {
    pub fn new() -> Self {
        Self { last: T::ZERO }
    }

    /// Feed the next phase; returns true if it wrapped since the last call.
    #[inline]
    pub fn tick(&mut self, phase: T) -> bool {
        let half = T::from_ratio(1, 2);
        let wrapped = phase < self.last && self.last - phase > half;
        self.last = phase;
        wrapped
    }

    pub fn reset(&mut self) {
        self.last = T::ZERO;
    }
}

/// Normalized `[0, 1)` phase accumulator.
#[derive(Debug, Clone)]
pub struct Phasor<T: Sample> {
    phase: T,
    phase_increment: T,
    last_phase: T,
    wrapped: bool,
    frequency: f32,
    sample_rate: f32,
}

impl<T: Sample> Phasor<T> {
    pub fn new(sample_rate: f32) -> Self {
        let mut phasor = Self {
            phase: T::ZERO,
            phase_increment: T::ZERO,
            last_phase: T::ZERO,
            wrapped: false,
            frequency: 440.0,
            sample_rate,
        };
        phasor.reset(sample_rate);
        phasor
    }

    /// Zero the phase and recompute the increment for a new sample rate.
    pub fn reset(&mut self, sample_rate: f32) {
        self.phase = T::ZERO;
        self.last_phase = T::ZERO;
        self.wrapped = false;
        self.sample_rate = sample_rate;
        self.update_phase_increment();
    }

    /// Change frequency without touching the phase.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
        self.update_phase_increment();
    }

    /// Advance one tick and return the new phase.
    #[inline]
    pub fn tick(&mut self) -> T {
        self.phase = (self.phase + self.phase_increment).frac();
        self.wrapped = self.phase < self.last_phase;
        self.last_phase = self.phase;
        self.phase
    }

    /// Whether the last `tick()` wrapped around.
    pub fn wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn phase(&self) -> T {
        self.phase
    }

    pub fn phase_increment(&self) -> T {
        self.phase_increment
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn update_phase_increment(&mut self) {
        self.phase_increment = T::from_f32(self.frequency / self.sample_rate);
    }
}
