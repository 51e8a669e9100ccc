//! Static page content: heading and the office/email/phone cards

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ACCENT: Color = Color::Magenta;

/// One informational card
struct InfoCard {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
}

const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        icon: "⌂",
        title: "Office",
        detail: "Victoria Street, London, UK",
    },
    InfoCard {
        icon: "✉",
        title: "Email",
        detail: "hammad2004qureshi@gmail.com",
    },
    InfoCard {
        icon: "☎",
        title: "Phone",
        detail: "0332-3141351",
    },
];

/// Rows used by [`draw_heading`]
pub const HEADING_HEIGHT: u16 = 3;
/// Rows used by [`draw_info_cards`]
pub const CARDS_HEIGHT: u16 = 4;

pub fn draw_heading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "CONTACT US",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Get in Touch",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Contact us to publish your content and show ads on our website and get a good reach.",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn draw_info_cards(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (card, chunk) in INFO_CARDS.iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(Line::from(Span::styled(
                format!(" {} {} ", card.icon, card.title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(card.detail)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, *chunk);
    }
}
