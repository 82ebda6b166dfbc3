//! Noise-terrain oscillator.
//!
//! A circle is traced through a 3-D noise field once per output cycle. The
//! field value along the circle is the waveform. Moving or resizing the
//! circle morphs the timbre; requests are measured first (so the output can
//! be normalized) and then crossfaded in over whole cycles.

/// Range pre-pass for a requested geometry.
pub mod evaluator;
/// Circle position, radius and normalization.
pub mod geometry;
/// Mailbox, evaluator and renderer wired together.
pub mod oscillator;
/// Output stage with the crossfade state machine.
pub mod renderer;
/// Cross-thread request handle.
pub mod shared;

pub use geometry::Geometry;
pub use oscillator::{TerrainOscillator, TerrainState};
pub use shared::{SharedTerrain, TerrainHandle};
