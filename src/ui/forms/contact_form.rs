//! Contact form rendering

use super::field_renderer::draw_field;
use crate::platform::{NEWLINE_KEY, SUBMIT_SHORTCUT};
use crate::state::{AppState, Field};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

const SUBMIT_LABEL: &str = "Send Message";

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let form = &state.form;

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Subject
            Constraint::Min(4),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    for field in Field::ALL {
        let error = form.visible_error(field);
        draw_field(
            frame,
            chunks[field.index()],
            &form.field(field),
            form.focused_field() == Some(field),
            error.as_deref(),
        );
    }

    let button_area = Rect {
        width: chunks[4].width.min(22),
        ..chunks[4]
    };
    render_submit_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        form.is_button_active(),
        state.pending_elapsed(now),
    );

    frame.render_widget(help_line(state), chunks[5]);
}

fn help_line(state: &AppState) -> Paragraph<'static> {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::raw(": send  "),
    ];

    if state.form.focused_field().is_some_and(|f| f.is_multiline()) {
        spans.push(Span::styled(NEWLINE_KEY, key));
        spans.push(Span::raw(": new line  "));
    }

    spans.push(Span::styled("Esc", key));
    spans.push(Span::raw(": quit"));

    Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray))
}
