//! Triggered oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Terrain output can overshoot the unit range slightly before the new
/// geometry's scaling settles.
const Y_LIMIT: f64 = 1.2;

/// Share of the buffer shown after the trigger point.
const WINDOW_FRACTION: usize = 2;

/// Index of the first rising zero crossing in the first half of `buffer`,
/// so the displayed window always has the same length.
fn trigger_point(buffer: &[f32]) -> Option<usize> {
    let search = buffer.len() / WINDOW_FRACTION;
    buffer
        .windows(2)
        .take(search)
        .position(|pair| pair[0] < 0.0 && pair[1] >= 0.0)
        .map(|i| i + 1)
}

/// Samples to draw: a triggered window when a crossing exists, otherwise
/// the free-running buffer.
fn scope_window(buffer: &[f32]) -> (&[f32], bool) {
    match trigger_point(buffer) {
        Some(start) => {
            let len = buffer.len() / WINDOW_FRACTION;
            (&buffer[start..start + len], true)
        }
        None => (buffer, false),
    }
}

pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
    let (window, triggered) = scope_window(audio_buffer);
    let peak = window.iter().fold(0.0f32, |peak, s| peak.max(s.abs()));

    let title = if triggered {
        format!(" Scope  trig  pk {peak:.2} ")
    } else {
        format!(" Scope  free  pk {peak:.2} ")
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let len = window.len().max(1) as f64;
    let data: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / len, (sample as f64).clamp(-Y_LIMIT, Y_LIMIT)))
        .collect();
    let baseline = [(0.0, 0.0), (1.0, 0.0)];

    let datasets = vec![
        Dataset::default()
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&baseline),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(if triggered { Color::Cyan } else { Color::Yellow }))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(Axis::default().bounds([0.0, 1.0]))
        .y_axis(
            Axis::default()
                .bounds([-Y_LIMIT, Y_LIMIT])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
