use super::geometry::Geometry;
use crate::config::TerrainConfig;
use crate::dsp::noise::NoiseField;
use crate::dsp::shapes::quadratic_sin_cos;
use crate::math::sample::{max, min};
use crate::math::Sample;

/// Smallest half-range accepted as a scaling ratio. Flatter circles are
/// left at this ratio instead of dividing by (almost) zero.
const MIN_SCALING_RATIO: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EvaluationState {
    Evaluating,
    Done,
}

/// Pre-pass measuring the range of the field along a geometry's circle.
///
/// One step per `sub_sample_count` ticks; each step samples the circle at
/// the sweep phase and widens the running min/max. When the sweep passes 1
/// the geometry's scaling is fixed and the evaluator is done.
#[derive(Debug, Clone)]
pub struct Evaluator<T: Sample> {
    noise: NoiseField,
    state: EvaluationState,
    geometry: Geometry<T>,
    range_min: T,
    range_max: T,
    sweep_phase: T,
    sweep_increment: T,
    sub_sample_count: u32,
    sub_sample_counter: u32,
}

impl<T: Sample> Evaluator<T> {
    pub fn new(noise: NoiseField, config: &TerrainConfig) -> Self {
        Self {
            noise,
            state: EvaluationState::Done,
            geometry: Geometry::default(),
            range_min: T::from_i32(2),
            range_max: T::from_i32(-2),
            sweep_phase: T::ZERO,
            sweep_increment: T::from_f32(config.sweep_increment),
            sub_sample_count: config.sub_sample_count.max(1),
            sub_sample_counter: 0,
        }
    }

    /// Start evaluating `geometry`, discarding any evaluation in flight.
    pub fn reset(&mut self, geometry: Geometry<T>) {
        self.state = EvaluationState::Evaluating;
        self.geometry = geometry;
        self.sweep_phase = T::ZERO;
        // Outside the field's range so the first sample sets both ends.
        self.range_min = T::from_i32(2);
        self.range_max = T::from_i32(-2);
        // The first tick after a reset evaluates.
        self.sub_sample_counter = self.sub_sample_count - 1;
    }

    pub fn is_finished(&self) -> bool {
        self.state == EvaluationState::Done
    }

    /// The geometry under evaluation; its scaling is final once finished.
    pub fn geometry(&self) -> Geometry<T> {
        self.geometry
    }

    #[inline]
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }

        self.sub_sample_counter = (self.sub_sample_counter + 1) % self.sub_sample_count;
        if self.sub_sample_counter == 0 {
            self.evaluate_next_step();
        }
    }

    fn evaluate_next_step(&mut self) {
        let (sin, cos) = quadratic_sin_cos(self.sweep_phase);
        let value = self.geometry.sample(&self.noise, sin, cos);

        self.range_min = min(self.range_min, value);
        self.range_max = max(self.range_max, value);

        self.sweep_phase += self.sweep_increment;
        if self.sweep_phase > T::ONE {
            let two = T::from_i32(2);
            self.geometry.scaling_offset = (self.range_max + self.range_min) / two;
            self.geometry.scaling_ratio = max(
                (self.range_max - self.range_min) / two,
                T::from_f32(MIN_SCALING_RATIO),
            );
            self.state = EvaluationState::Done;
        }
    }
}
