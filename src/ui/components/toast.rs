//! Toast overlay in the top-right corner

use crate::state::{ToastKind, ToastQueue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast including borders
const TOAST_WIDTH: u16 = 44;

/// Render all visible toasts, newest at the top
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let width = TOAST_WIDTH.min(area.width);
    let max_line_width = width.saturating_sub(4) as usize;
    let mut y = area.y + 1;

    for toast in toasts.iter().rev() {
        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✔", Color::Green),
            ToastKind::Failure => ("✖", Color::Red),
        };

        let lines = wrap_text(&format!("{icon} {}", toast.message), max_line_width);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height,
        };

        let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(Clear, toast_area);
        frame.render_widget(paragraph, toast_area);
        y += height;
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let current_width = current_line.chars().count();
        if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }
    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}
