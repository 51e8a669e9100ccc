//! Form rendering module
//!
//! - `field_renderer`: single input with its inline error
//! - `contact_form`: the contact form and its submit button

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
