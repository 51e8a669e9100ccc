//! State management for the TUI

mod app_state;
pub mod forms;
mod toast;
mod user;
pub mod validation;

pub use app_state::AppState;
pub use forms::{ContactForm, ContactMessage, Field, Form, FormField, FormValues, SubmissionState};
pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_DURATION};
pub use user::CurrentUser;
