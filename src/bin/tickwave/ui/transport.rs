//! Status bar: active source, terrain state, drum step and levels

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tickwave::{sequencing::Selector, terrain::TerrainState};

use super::state::{EngineStatus, Source};

pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

fn terrain_span(state: TerrainState) -> Span<'static> {
    let (label, color) = match state {
        TerrainState::Steady => ("steady", Color::Green),
        TerrainState::Evaluating => ("evaluating", Color::Yellow),
        TerrainState::Fading => ("fading", Color::Magenta),
    };
    Span::styled(format!("terrain: {label}  "), Style::default().fg(color))
}

fn drum_spans(status: &EngineStatus) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("step {:>2}  ", status.step + 1),
        Style::default().fg(Color::White),
    )];
    for selector in Selector::ALL {
        let hit = status.hits[selector.index()];
        let color = match (hit, status.accent && selector == Selector::Kick) {
            (true, true) => Color::Red,
            (true, false) => Color::Yellow,
            _ => Color::DarkGray,
        };
        spans.push(Span::styled(
            format!("{} ", selector.name()),
            Style::default().fg(color),
        ));
    }
    spans.push(Span::raw(" "));
    spans
}

pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    sample_rate: f32,
    status: &EngineStatus,
    audio_stats: &AudioStats,
) {
    let block = Block::default()
        .title(" tickwave ")
        .borders(Borders::ALL);

    let mut spans = vec![Span::styled(
        format!(" {}  ", status.source.name()),
        Style::default().fg(Color::Cyan),
    )];

    match status.source {
        Source::Terrain => spans.push(terrain_span(status.terrain)),
        Source::Drums => spans.extend(drum_spans(status)),
        Source::Oscillator => {}
    }

    spans.push(Span::styled(
        format!("{:.1}kHz  ", sample_rate / 1000.0),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(
        format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
        Style::default().fg(Color::Magenta),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
