use super::geometry::Geometry;
use crate::dsp::noise::NoiseField;
use crate::dsp::phasor::WrapDetector;
use crate::dsp::shapes::{cosine, sine};
use crate::math::sample::lerp;
use crate::math::Sample;

/// Samples the field along the current geometry, crossfading to a newly
/// evaluated one over whole output cycles.
#[derive(Debug, Clone)]
pub struct Renderer<T: Sample> {
    noise: NoiseField,
    from: Geometry<T>,
    to: Geometry<T>,
    fading: bool,
    fade_cycle_count: u32, // wraps left in the current fade
    fade_length: u32,      // latched when the current fade started
    fade_cycles: u32,
    wrap: WrapDetector<T>,
    queued: Option<Geometry<T>>, // evaluated, waiting for the next wrap
}

impl<T: Sample> Renderer<T> {
    pub fn new(noise: NoiseField, fade_cycles: u32) -> Self {
        Self {
            noise,
            from: Geometry::default(),
            to: Geometry::default(),
            fading: false,
            fade_cycle_count: 0,
            fade_length: 1,
            fade_cycles: Self::clamp_fade_cycles(fade_cycles),
            wrap: WrapDetector::new(),
            queued: None,
        }
    }

    /// Hand over an evaluated geometry. Replaces one that has not started
    /// fading yet.
    pub fn queue_geometry(&mut self, geometry: Geometry<T>) {
        self.queued = Some(geometry);
    }

    /// Zero is treated as one cycle. Takes effect on the next fade; a fade
    /// in progress keeps the length it started with.
    pub fn set_fade_cycles(&mut self, fade_cycles: u32) {
        self.fade_cycles = Self::clamp_fade_cycles(fade_cycles);
    }

    fn clamp_fade_cycles(fade_cycles: u32) -> u32 {
        fade_cycles.clamp(1, i32::MAX as u32)
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn has_queued_geometry(&self) -> bool {
        self.queued.is_some()
    }

    /// Geometry currently (or, while fading, previously) rendered.
    pub fn geometry(&self) -> Geometry<T> {
        self.from
    }

    pub fn tick(&mut self, phase: T) -> T {
        if self.wrap.tick(phase) {
            self.on_wrap();
        }

        let sin = sine(phase);
        let cos = cosine(phase);

        let from = self.from.sample_scaled(&self.noise, sin, cos);
        if !self.fading {
            return from;
        }

        let to = self.to.sample_scaled(&self.noise, sin, cos);
        // (elapsed + phase) / length, without forming the cycle count in T.
        let length = self.fade_length;
        let elapsed = length.saturating_sub(self.fade_cycle_count);
        let mix = T::from_ratio(elapsed as i32, length as i32) + phase.div_count(length as u64);
        lerp(from, to, mix)
    }

    fn on_wrap(&mut self) {
        if self.fading {
            self.fade_cycle_count = self.fade_cycle_count.saturating_sub(1);
            if self.fade_cycle_count == 0 {
                self.from = self.to;
                self.fading = false;
            }
        }

        if !self.fading {
            if let Some(geometry) = self.queued.take() {
                self.to = geometry;
                self.fading = true;
                self.fade_length = self.fade_cycles;
                self.fade_cycle_count = self.fade_cycles;
            }
        }
    }
}
