//! Audio-thread side of the app.
//!
//! The engine owns every generator and renders one sample per device frame.
//! Control messages are drained once per callback; nothing here allocates
//! or locks.

use rtrb::{Consumer, Producer};
use tickwave::{
    dsp::{AdEnvelope, ExpSegment, LinearAdEnvelope, Oscillator, Phasor, RampedValue},
    sequencing::{PatternEngine, Selector},
    terrain::SharedTerrain,
    EngineConfig, RandomSource,
};

use crate::ui::state::{ControlMessage, EngineStatus, Source};

/// Status snapshots per second.
const STATUS_RATE: f32 = 30.0;
/// Frequency changes glide over this long.
const GLIDE_SECONDS: f32 = 0.05;

const KICK_BASE_HZ: f32 = 45.0;
const KICK_SWEEP_HZ: f32 = 110.0;

fn ticks(sample_rate: f32, millis: f32) -> u32 {
    (sample_rate * millis / 1000.0) as u32
}

/// Sixteenth notes per second at `tempo` BPM.
fn step_rate(tempo: f32) -> f32 {
    tempo / 15.0
}

/// Three-voice drum synth played by the pattern engine.
struct Drums {
    pattern: PatternEngine,
    clock: Phasor<f32>,
    x: u8,
    y: u8,
    density: u8,
    kick: Oscillator<f32>,
    kick_pitch: ExpSegment<f32>,
    kick_amp: AdEnvelope<f32>,
    kick_sweep: u32,
    snare: LinearAdEnvelope<f32>,
    hat: AdEnvelope<f32>,
    noise: RandomSource,
    last_step: u8,
    hits: [bool; 3],
    accent: bool,
}

impl Drums {
    fn new(config: &EngineConfig, tempo: f32) -> Self {
        let sr = config.sample_rate;

        let mut clock = Phasor::new(sr);
        clock.set_frequency(step_rate(tempo));

        let mut kick_amp = AdEnvelope::new();
        kick_amp.set_slopes(ticks(sr, 2.0), ticks(sr, 350.0));
        let mut snare = LinearAdEnvelope::new();
        snare.set_slopes(ticks(sr, 1.0), ticks(sr, 180.0));
        let mut hat = AdEnvelope::new();
        hat.set_slopes(ticks(sr, 1.0), ticks(sr, 60.0));

        Self {
            pattern: PatternEngine::new(&config.pattern),
            clock,
            x: 0,
            y: 0,
            density: 192,
            kick: Oscillator::new(sr),
            kick_pitch: ExpSegment::new(),
            kick_amp,
            kick_sweep: ticks(sr, 60.0),
            snare,
            hat,
            noise: RandomSource::from_clock(),
            last_step: 0,
            hits: [false; 3],
            accent: false,
        }
    }

    fn set_tempo(&mut self, tempo: f32) {
        self.clock.set_frequency(step_rate(tempo));
    }

    #[inline]
    fn tick(&mut self) -> f32 {
        self.clock.tick();

        let mut gates = [false; 3];
        if self.clock.wrapped() {
            for selector in Selector::ALL {
                gates[selector.index()] =
                    self.pattern.trigger(selector, self.x, self.y, self.density);
            }
            self.accent = self.pattern.is_accent(Selector::Kick, self.x, self.y);
            self.last_step = self.pattern.step();
            self.hits = gates;
            self.pattern.advance();

            if gates[Selector::Kick.index()] {
                self.kick_pitch.start(1.0, 0.0, self.kick_sweep);
            }
        }

        let pitch = self.kick_pitch.tick();
        self.kick.set_frequency(KICK_BASE_HZ + KICK_SWEEP_HZ * pitch);
        let level = if self.accent { 1.0 } else { 0.7 };
        let kick = self.kick.tick() * self.kick_amp.tick(gates[0]) * level;

        let noise = self.noise.next_f32() * 2.0 - 1.0;
        let snare = noise * self.snare.tick(gates[1]) * 0.5;
        let hat = noise * self.hat.tick(gates[2]) * 0.25;

        (kick + snare + hat) * 0.6
    }
}

pub struct Engine {
    source: Source,
    oscillator: Oscillator<f32>,
    terrain: SharedTerrain<f32>,
    terrain_phasor: Phasor<f32>,
    frequency: RampedValue<f32>,
    glide_ticks: u64,
    drums: Drums,
    control_rx: Consumer<ControlMessage>,
    audio_tx: Producer<f32>,
    status_tx: Producer<EngineStatus>,
    status_interval: u32,
    status_countdown: u32,
}

impl Engine {
    pub fn new(
        config: &EngineConfig,
        tempo: f32,
        frequency: f32,
        terrain: SharedTerrain<f32>,
        control_rx: Consumer<ControlMessage>,
        audio_tx: Producer<f32>,
        status_tx: Producer<EngineStatus>,
    ) -> Self {
        let sr = config.sample_rate;
        let mut oscillator = Oscillator::new(sr);
        oscillator.set_frequency(frequency);
        let mut terrain_phasor = Phasor::new(sr);
        terrain_phasor.set_frequency(frequency);

        let status_interval = ((sr / STATUS_RATE) as u32).max(1);

        Self {
            source: Source::default(),
            oscillator,
            terrain,
            terrain_phasor,
            frequency: RampedValue::new(frequency),
            glide_ticks: (sr * GLIDE_SECONDS) as u64,
            drums: Drums::new(config, tempo),
            control_rx,
            audio_tx,
            status_tx,
            status_interval,
            status_countdown: status_interval,
        }
    }

    /// Fill an interleaved output buffer, copying the mono signal to every
    /// channel.
    pub fn process(&mut self, data: &mut [f32], channels: usize) {
        self.poll_control();

        for frame in data.chunks_mut(channels.max(1)) {
            let sample = self.tick();
            frame.fill(sample);

            // The scope just misses samples when the UI falls behind.
            let _ = self.audio_tx.push(sample);
        }
    }

    fn poll_control(&mut self) {
        while let Ok(message) = self.control_rx.pop() {
            match message {
                ControlMessage::SetSource(source) => self.source = source,
                ControlMessage::SetWaveform(waveform) => self.oscillator.set_waveform(waveform),
                ControlMessage::SetFrequency(hz) => {
                    self.frequency.ramp_to(hz, self.glide_ticks);
                    self.apply_frequency();
                }
                ControlMessage::SetPulseWidth(width) => self.oscillator.set_pulse_width(width),
                ControlMessage::SetShape(shape) => self.oscillator.set_shape(shape),
                ControlMessage::SetTempo(tempo) => self.drums.set_tempo(tempo),
                ControlMessage::SetMap { x, y } => {
                    self.drums.x = x;
                    self.drums.y = y;
                }
                ControlMessage::SetDensity(density) => self.drums.density = density,
                ControlMessage::SetChaos(chaos) => self.drums.pattern.set_chaos(chaos),
            }
        }
    }

    #[inline]
    fn tick(&mut self) -> f32 {
        if self.frequency.is_ramping() {
            self.frequency.tick();
            self.apply_frequency();
        }

        let sample = match self.source {
            Source::Oscillator => self.oscillator.tick(),
            Source::Terrain => {
                let phase = self.terrain_phasor.tick();
                self.terrain.tick(phase)
            }
            Source::Drums => self.drums.tick(),
        };

        self.status_countdown -= 1;
        if self.status_countdown == 0 {
            self.status_countdown = self.status_interval;
            let _ = self.status_tx.push(self.status());
        }

        sample
    }

    fn apply_frequency(&mut self) {
        let hz = self.frequency.value();
        self.oscillator.set_frequency(hz);
        self.terrain_phasor.set_frequency(hz);
    }

    fn status(&self) -> EngineStatus {
        EngineStatus {
            source: self.source,
            terrain: self.terrain.oscillator().state(),
            step: self.drums.last_step,
            hits: self.drums.hits,
            accent: self.drums.accent,
        }
    }
}
