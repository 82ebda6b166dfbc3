//! Step sequencing: drum patterns, clock following and gate patterns.

/// Clock follower and phase multiplier.
pub mod clock;
mod drum_map;
/// Random high/low gate patterns.
pub mod flip_flop;
/// Topographic drum pattern engine.
pub mod grids;

pub use clock::{PhasorDivider, PingablePhasor};
pub use drum_map::{MAP_SIZE, NODE_CHANNELS, NODE_STEPS};
pub use flip_flop::{runs_to_gates, FlipFlopWeaver};
pub use grids::{PatternEngine, Selector};
