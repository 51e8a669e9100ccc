//! Reusable UI components

mod button;
mod spinner;
mod toast;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use toast::render_toasts;
