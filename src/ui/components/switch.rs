//! Two-state toggle switch component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a labeled switch. The checked state is shown both as a track
/// and as a `checked=true/false` tag so it reads unambiguously.
pub fn render_switch(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let track = if checked { "(  ●)" } else { "(●  )" };
    let track_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = Line::from(vec![
        Span::styled(track, track_style),
        Span::raw("  "),
        Span::styled(
            format!("checked={checked}"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
