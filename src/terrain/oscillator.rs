use tracing::debug;

use super::evaluator::Evaluator;
use super::geometry::Geometry;
use super::renderer::Renderer;
use crate::config::TerrainConfig;
use crate::dsp::noise::NoiseField;
use crate::math::Sample;

/// What the oscillator is doing with geometry requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainState {
    /// A request is being measured or waits for the next output wrap.
    Evaluating,
    /// Blending from the old geometry to the new one.
    Fading,
    /// Rendering a single geometry, nothing pending.
    Steady,
}

/// Noise-terrain oscillator: samples a noise field along a circle, one
/// circle per output cycle.
///
/// Geometry changes go through three stages: a mailbox (latest request
/// wins), the evaluator (measures the range along the new circle), and the
/// renderer (crossfades on output wraps). None of them is ever interrupted;
/// a newer request is picked up at the next natural completion point.
#[derive(Debug, Clone)]
pub struct TerrainOscillator<T: Sample> {
    evaluator: Evaluator<T>,
    renderer: Renderer<T>,
    mailbox: Option<Geometry<T>>,
}

impl<T: Sample> TerrainOscillator<T> {
    pub fn new(config: &TerrainConfig) -> Self {
        let noise = NoiseField::default();
        Self {
            evaluator: Evaluator::new(noise, config),
            renderer: Renderer::new(noise, config.fade_cycles),
            mailbox: None,
        }
    }

    /// Request a new circle. Replaces any request not yet being evaluated.
    pub fn set_parameters(&mut self, radius: T, x: T, y: T, z: T) {
        self.set_geometry(Geometry::new(x, y, z, radius));
    }

    pub fn set_geometry(&mut self, geometry: Geometry<T>) {
        if self.mailbox.is_some() {
            debug!("terrain request superseded before evaluation");
        }
        debug!(?geometry, "terrain geometry requested");
        self.mailbox = Some(geometry);
    }

    pub fn set_fade_cycles(&mut self, fade_cycles: u32) {
        self.renderer.set_fade_cycles(fade_cycles);
    }

    pub fn state(&self) -> TerrainState {
        if self.renderer.is_fading() {
            TerrainState::Fading
        } else if !self.evaluator.is_finished()
            || self.renderer.has_queued_geometry()
            || self.mailbox.is_some()
        {
            TerrainState::Evaluating
        } else {
            TerrainState::Steady
        }
    }

    /// Geometry currently rendered (the fade source while fading).
    pub fn geometry(&self) -> Geometry<T> {
        self.renderer.geometry()
    }

    /// One output sample at `phase`, driven by an external phasor.
    #[inline]
    pub fn tick(&mut self, phase: T) -> T {
        let was_evaluating = !self.evaluator.is_finished();
        self.evaluator.tick();
        let finished = self.evaluator.is_finished();

        if was_evaluating && finished {
            self.renderer.queue_geometry(self.evaluator.geometry());
        }

        if finished {
            if let Some(geometry) = self.mailbox.take() {
                self.evaluator.reset(geometry);
            }
        }

        self.renderer.tick(phase)
    }
}

impl<T: Sample> Default for TerrainOscillator<T> {
    fn default() -> Self {
        Self::new(&TerrainConfig::default())
    }
}
