//! Messages between the UI thread and the audio thread.
//!
//! Everything here is `Copy` so both directions stay allocation-free.

use tickwave::dsp::Waveform;
use tickwave::terrain::TerrainState;

/// Generator routed to the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Oscillator,
    Terrain,
    Drums,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Oscillator, Source::Terrain, Source::Drums];
    pub const NAMES: [&'static str; 3] = ["oscillator", "terrain", "drums"];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

/// Commands sent from the UI thread to the audio thread.
///
/// Terrain geometry has its own request slot, see [`tickwave::terrain::TerrainHandle`].
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    SetSource(Source),
    SetWaveform(Waveform),
    SetFrequency(f32),
    SetPulseWidth(f32),
    SetShape(f32),
    SetTempo(f32),
    SetMap { x: u8, y: u8 },
    SetDensity(u8),
    SetChaos(u8),
}

/// Snapshot published by the audio thread a few dozen times per second.
#[derive(Clone, Copy, Debug)]
pub struct EngineStatus {
    pub source: Source,
    pub terrain: TerrainState,
    /// Last pattern step played
    pub step: u8,
    /// Which drum channels fired on that step
    pub hits: [bool; 3],
    pub accent: bool,
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self {
            source: Source::default(),
            terrain: TerrainState::Steady,
            step: 0,
            hits: [false; 3],
            accent: false,
        }
    }
}
