//! Parameter page widget

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tickwave::params::ParameterPage;

pub fn render_params(frame: &mut Frame, area: Rect, page: &ParameterPage) {
    let block = Block::default()
        .title(" Parameters ")
        .borders(Borders::ALL);

    let lines: Vec<Line> = page
        .iter()
        .enumerate()
        .map(|(i, (name, parameter))| {
            let selected = i == page.cursor();
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{name:<12}"), style),
                Span::styled(parameter.to_string(), Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
