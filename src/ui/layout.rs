//! Layout components (page regions, status bar)

use super::header::{CARDS_HEIGHT, HEADING_HEIGHT};
use crate::state::{AppState, SubmissionState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Regions of the page
pub struct PageLayout {
    pub heading: Rect,
    pub cards: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Split the screen into heading, cards, form and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADING_HEIGHT), // Heading
            Constraint::Length(CARDS_HEIGHT),   // Info cards
            Constraint::Min(0),                 // Form
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    PageLayout {
        heading: chunks[0],
        cards: chunks[1],
        form: chunks[2],
        status: chunks[3],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![];

    let submission = match state.form.submission() {
        SubmissionState::Pending => Span::styled(" ● sending ", Style::default().fg(Color::Yellow)),
        SubmissionState::Idle => Span::styled(" ○ ready ", Style::default().fg(Color::Green)),
    };
    spans.push(submission);

    if let Some(user) = &state.current_user {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(user.greeting(), Style::default().fg(Color::Blue)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
