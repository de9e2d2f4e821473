//! Intake form rendering

use crate::app::App;
use crate::state::form::{AgeField, ConsentField, FieldPhase, MessageTransition, NameField};
use crate::ui::components::{render_button, render_switch, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the whole form into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name message
            Constraint::Length(3), // Age
            Constraint::Length(1), // Age message
            Constraint::Length(3), // Consent switch
            Constraint::Length(1), // Consent message
            Constraint::Length(BUTTON_HEIGHT), // Buttons row
            Constraint::Length(2), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Intake Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &app.state.form;

    draw_text_field(
        frame,
        chunks[0],
        NameField::LABEL,
        form.name.text(),
        form.name.phase(),
        form.active_field_index == 0,
    );
    draw_message(frame, chunks[1], &app.state.name_message);

    draw_text_field(
        frame,
        chunks[2],
        AgeField::LABEL,
        form.age.text(),
        form.age.phase(),
        form.active_field_index == 1,
    );
    draw_message(frame, chunks[3], &app.state.age_message);

    render_switch(
        frame,
        chunks[4],
        ConsentField::LABEL,
        form.consent.is_accepted(),
        form.active_field_index == 2,
    );
    draw_message(frame, chunks[5], &app.state.consent_message);

    draw_buttons_row(frame, chunks[6], app);
    draw_help(frame, chunks[7]);
}

/// Draw one bordered text input
fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    phase: FieldPhase,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if phase == FieldPhase::TouchedInvalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a field's validation message line, faded by its transition
fn draw_message(frame: &mut Frame, area: Rect, transition: &MessageTransition) {
    let Some(text) = transition.visible_text() else {
        return;
    };
    let paragraph =
        Paragraph::new(format!(" {text}")).style(Style::default().fg(fade_color(transition.opacity())));
    frame.render_widget(paragraph, area);
}

/// Red ramp for the message fade; near-invisible at low presence
fn fade_color(opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    Color::Rgb((224.0 * t) as u8, (72.0 * t) as u8, (72.0 * t) as u8)
}

/// Draw the Reset/Submit buttons row
fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    let on_buttons = form.is_buttons_row_active();
    render_button(
        frame,
        chunks[0],
        "Reset",
        on_buttons && form.selected_button == 0,
        true,
    );
    // Submit still works while dimmed; the controller re-validates and
    // blocks on activation
    render_button(
        frame,
        chunks[1],
        "Submit",
        on_buttons && form.selected_button == 1,
        form.is_valid(),
    );
}

/// Draw the keyboard help line
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(": toggle  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled(crate::platform::RESET_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": reset"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
