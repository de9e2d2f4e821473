//! Screen layout and status bar

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Center the form in the available space, capped to a readable width
pub fn form_area(area: Rect) -> Rect {
    const FORM_WIDTH: u16 = 60;
    const FORM_HEIGHT: u16 = 20;

    let width = area.width.min(FORM_WIDTH);
    let height = area.height.min(FORM_HEIGHT);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(ref status) = app.state.status_message {
        (status.text.clone(), Style::default().fg(Color::Green))
    } else if let Some(ref submission) = app.state.last_submission {
        (
            format!(
                "Last submission: {} at {}",
                submission.name,
                submission.submitted_at.format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Fill in the form and press Submit".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(format!(" {text}")).style(style), area);
}
