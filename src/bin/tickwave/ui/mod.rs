//! TUI for tickwave
//!
//! Scope, spectrum and a parameter page that edits the running engine.

mod params;
mod spectrum;
pub mod state;
mod transport;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use tickwave::{
    dsp::Waveform,
    params::{Parameter, ParameterPage, Value},
    terrain::TerrainHandle,
};

use params::render_params;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use state::{ControlMessage, EngineStatus, Source};
use transport::{render_transport, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;
/// Step applied by the coarse keys
const COARSE: i32 = 10;

/// UI application state
pub struct UiApp {
    sample_rate: f32,
    audio_rx: Consumer<f32>,
    status_rx: Consumer<EngineStatus>,
    control_tx: Producer<ControlMessage>,
    terrain: TerrainHandle<f32>,
    status: EngineStatus,
    page: ParameterPage,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        sample_rate: f32,
        tempo: f32,
        frequency: f32,
        audio_rx: Consumer<f32>,
        status_rx: Consumer<EngineStatus>,
        control_tx: Producer<ControlMessage>,
        terrain: TerrainHandle<f32>,
    ) -> Self {
        let page = ParameterPage::new()
            .with("source", Parameter::choice(0, &Source::NAMES))
            .with("waveform", Parameter::choice(0, &Waveform::NAMES))
            .with("frequency", Parameter::float(frequency, 20.0, 2_000.0, 5.0))
            .with("pulse width", Parameter::float(0.5, 0.05, 0.95, 0.05))
            .with("shape", Parameter::float(0.5, 0.0, 1.0, 0.05))
            .with("radius", Parameter::float(0.2, 0.02, 1.0, 0.02))
            .with("terrain x", Parameter::float(0.0, 0.0, 8.0, 0.05))
            .with("terrain y", Parameter::float(0.0, 0.0, 8.0, 0.05))
            .with("terrain z", Parameter::float(0.0, 0.0, 8.0, 0.05))
            .with("tempo", Parameter::float(tempo, 40.0, 240.0, 1.0))
            .with("map x", Parameter::int(0, 0, 255))
            .with("map y", Parameter::int(0, 0, 255))
            .with("density", Parameter::int(192, 0, 255))
            .with("chaos", Parameter::int(0, 0, 255));

        Self {
            sample_rate,
            audio_rx,
            status_rx,
            control_tx,
            terrain,
            status: EngineStatus::default(),
            page,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_status();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep the last VIS_BUFFER_SIZE samples
    fn poll_audio(&mut self) {
        let mut received = false;
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
            received = true;
        }

        if received && self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn poll_status(&mut self) {
        while let Ok(status) = self.status_rx.pop() {
            self.status = status;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.page.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.page.next(),
            KeyCode::Left | KeyCode::Char('h') => self.nudge(-1),
            KeyCode::Right | KeyCode::Char('l') => self.nudge(1),
            KeyCode::Char('[') => self.nudge(-COARSE),
            KeyCode::Char(']') => self.nudge(COARSE),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(source) = self.page.get_mut("source") {
                    source.set(Value::Choice(index));
                }
                self.apply("source");
            }
            _ => {}
        }
    }

    fn nudge(&mut self, direction: i32) {
        if let Some(name) = self.page.update_current(direction) {
            self.apply(name);
        }
    }

    /// Forward the named parameter to the engine.
    fn apply(&mut self, name: &str) {
        let message = match name {
            "source" => ControlMessage::SetSource(Source::from_index(self.index("source"))),
            "waveform" => ControlMessage::SetWaveform(Waveform::from_index(self.index("waveform"))),
            "frequency" => ControlMessage::SetFrequency(self.float("frequency")),
            "pulse width" => ControlMessage::SetPulseWidth(self.float("pulse width")),
            "shape" => ControlMessage::SetShape(self.float("shape")),
            "tempo" => ControlMessage::SetTempo(self.float("tempo")),
            "map x" | "map y" => ControlMessage::SetMap {
                x: self.byte("map x"),
                y: self.byte("map y"),
            },
            "density" => ControlMessage::SetDensity(self.byte("density")),
            "chaos" => ControlMessage::SetChaos(self.byte("chaos")),
            "radius" | "terrain x" | "terrain y" | "terrain z" => {
                let radius = self.float("radius");
                let (x, y, z) = (
                    self.float("terrain x"),
                    self.float("terrain y"),
                    self.float("terrain z"),
                );
                self.terrain.set_parameters(radius, x, y, z);
                return;
            }
            _ => return,
        };

        // A full queue means the audio thread is stalled; the next edit resends.
        let _ = self.control_tx.push(message);
    }

    fn float(&self, name: &str) -> f32 {
        self.page.get(name).map(Parameter::as_f32).unwrap_or_default()
    }

    fn index(&self, name: &str) -> usize {
        match self.page.get(name).map(Parameter::value) {
            Some(Value::Choice(index)) => index,
            _ => 0,
        }
    }

    fn byte(&self, name: &str) -> u8 {
        self.float(name).clamp(0.0, 255.0) as u8
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(10),   // Parameters and scopes
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_transport(frame, rows[0], self.sample_rate, &self.status, &stats);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(20)])
            .split(rows[1]);

        render_params(frame, columns[0], &self.page);

        let scopes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        render_waveform(frame, scopes[0], &self.audio_buffer);
        render_spectrum(frame, scopes[1], self.spectrum.data());

        let help = Paragraph::new(
            " [Q] Quit  [↑↓] Select  [←→] Adjust  [ [ ] ] Coarse  [1-3] Source",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[2]);
    }
}
