//! Tickwave - application builder and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use tickwave::{terrain::SharedTerrain, EngineConfig};

use super::engine::Engine;
use super::ui::{
    state::{ControlMessage, EngineStatus},
    UiApp,
};

/// Samples buffered between the audio callback and the scope.
const AUDIO_QUEUE_SIZE: usize = 8192;
const CONTROL_QUEUE_SIZE: usize = 64;
const STATUS_QUEUE_SIZE: usize = 16;

/// Main application builder
pub struct Tickwave {
    config: EngineConfig,
    tempo: f32,
    frequency: f32,
}

impl Tickwave {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            tempo: 120.0,
            frequency: 110.0,
        }
    }

    /// Terrain and pattern settings. The sample rate is replaced by the
    /// output device's.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Drum tempo in beats per minute
    pub fn tempo(mut self, tempo: f32) -> Self {
        self.tempo = tempo;
        self
    }

    /// Starting pitch of the oscillator and terrain sources
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;

        let config = EngineConfig {
            sample_rate,
            ..self.config
        };
        config.validate().wrap_err("invalid engine config")?;

        println!("=== tickwave ===");
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);
        println!("Tempo: {} BPM", self.tempo);
        println!(
            "Terrain: fade {} cycles, {} ticks per sweep step",
            config.terrain.fade_cycles, config.terrain.sub_sample_count
        );
        println!();

        let (audio_tx, audio_rx) = RingBuffer::<f32>::new(AUDIO_QUEUE_SIZE);
        let (control_tx, control_rx) = RingBuffer::<ControlMessage>::new(CONTROL_QUEUE_SIZE);
        let (status_tx, status_rx) = RingBuffer::<EngineStatus>::new(STATUS_QUEUE_SIZE);
        let (terrain, terrain_handle) = SharedTerrain::new(&config.terrain);

        let mut engine = Engine::new(
            &config,
            self.tempo,
            self.frequency,
            terrain,
            control_rx,
            audio_tx,
            status_tx,
        );

        let stream = device
            .build_output_stream(
                &stream_config.into(),
                move |data: &mut [f32], _| engine.process(data, channels),
                |err| eprintln!("Audio error: {}", err),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut ui = UiApp::new(
            sample_rate,
            self.tempo,
            self.frequency,
            audio_rx,
            status_rx,
            control_tx,
            terrain_handle,
        );

        let mut terminal = ratatui::init();
        let result = ui.run(&mut terminal);
        ratatui::restore();

        drop(stream);
        result
    }
}

impl Default for Tickwave {
    fn default() -> Self {
        Self::new()
    }
}
