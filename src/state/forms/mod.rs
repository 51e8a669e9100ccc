//! Form domain layer
//!
//! Type-safe field model for the contact form plus the payload it produces.

mod field;
mod form_state;
mod values;

pub use field::{Field, FormField};
pub use form_state::{ContactForm, Form, SubmissionState, SubmitBlocked, BUTTON_INDEX};
pub use values::{ContactMessage, FormValues};
