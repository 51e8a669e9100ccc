//! UI module for rendering the TUI

mod components;
mod forms;
mod header;
mod layout;

use crate::app::App;
use crate::state::AppState;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    draw_page(frame, &app.state, Instant::now());
}

/// Draw the whole page from state
fn draw_page(frame: &mut Frame, state: &AppState, now: Instant) {
    let page = layout::create_layout(frame.area());

    header::draw_heading(frame, page.heading);
    header::draw_info_cards(frame, page.cards);
    forms::draw_contact_form(frame, page.form, state, now);
    layout::draw_status_bar(frame, page.status, state);

    // Toasts float over everything else
    components::render_toasts(frame, frame.area(), &state.toasts);
}
