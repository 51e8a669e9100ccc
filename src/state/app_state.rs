//! Application state definitions

use super::forms::ContactForm;
use super::toast::ToastQueue;
use super::user::CurrentUser;
use std::time::{Duration, Instant};

/// Everything the UI renders from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The contact form
    pub form: ContactForm,
    /// Visible notifications
    pub toasts: ToastQueue,
    /// Injected identity, shown in the status bar
    pub current_user: Option<CurrentUser>,
    /// When the outstanding submission started, drives the spinner
    pub pending_since: Option<Instant>,
}

impl AppState {
    pub fn new(current_user: Option<CurrentUser>, toast_duration: Duration) -> Self {
        Self {
            form: ContactForm::new(),
            toasts: ToastQueue::new(toast_duration),
            current_user,
            pending_since: None,
        }
    }

    /// Time spent waiting on the outstanding submission
    pub fn pending_elapsed(&self, now: Instant) -> Option<Duration> {
        self.pending_since
            .map(|since| now.saturating_duration_since(since))
    }
}
