//! Application state and core logic

use crate::backend::{ContactBackend, ContactClient};
use crate::config::ContactConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::forms::SubmitBlocked;
use crate::state::{AppState, CurrentUser, Form};
use crate::submission::{self, FailureReason, Outcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the contact endpoint
    backend: Arc<dyn ContactBackend>,
    /// Outstanding submission, if any
    in_flight: Option<JoinHandle<Outcome>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let backend_url = config.backend_url();
        let client = ContactClient::new(&backend_url)?;
        tracing::info!(endpoint = %client.endpoint(), "Contact form ready");

        Ok(Self::with_backend(
            Arc::new(client),
            config.current_user.clone(),
            config.toast_duration(),
        ))
    }

    /// Create an App around any backend
    pub fn with_backend(
        backend: Arc<dyn ContactBackend>,
        current_user: Option<CurrentUser>,
        toast_duration: Duration,
    ) -> Self {
        Self {
            state: AppState::new(current_user, toast_duration),
            backend,
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the UI needs fast redraws (spinner or toasts on screen)
    pub fn is_animating(&self) -> bool {
        self.state.form.is_pending() || !self.state.toasts.is_empty()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        if key.modifiers.contains(SUBMIT_MODIFIER) && key.code == KeyCode::Char('s') {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => {
                if self.state.form.is_button_active() {
                    self.submit();
                } else if self
                    .state
                    .form
                    .focused_field()
                    .is_some_and(|f| f.is_multiline())
                {
                    self.state.form.input_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c) => self.state.form.input_char(c),
            _ => {}
        }
    }

    /// Start a submission on a background task.
    ///
    /// Does nothing while a submission is pending or when validation fails;
    /// the failing fields become visible instead.
    pub fn submit(&mut self) {
        let message = match self.state.form.begin_submit() {
            Ok(message) => message,
            Err(SubmitBlocked::AlreadyPending) => {
                tracing::debug!("Submit ignored, request already in flight");
                return;
            }
            Err(SubmitBlocked::Invalid(errors)) => {
                for (field, message) in errors.iter() {
                    tracing::debug!(
                        field = field.wire_key(),
                        error = message,
                        "Field failed validation"
                    );
                }
                return;
            }
        };

        let backend = Arc::clone(&self.backend);
        self.state.pending_since = Some(Instant::now());
        self.in_flight = Some(tokio::spawn(async move {
            submission::send(backend.as_ref(), &message).await
        }));
    }

    /// Whether a request is still outstanding
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Apply the outcome of a finished submission and expire old toasts.
    /// Called once per loop iteration.
    pub async fn tick(&mut self) {
        if self
            .in_flight
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
        {
            if let Some(handle) = self.in_flight.take() {
                let outcome = handle.await.unwrap_or_else(|err| {
                    tracing::error!(error = %err, "Submission task failed");
                    Outcome::Failure(FailureReason::Transport(err.to_string()))
                });
                self.settle(&outcome);
            }
        }

        self.state.toasts.expire(Instant::now());
    }

    fn settle(&mut self, outcome: &Outcome) {
        tracing::debug!(success = outcome.is_success(), "Submission settled");
        let state = &mut self.state;
        submission::settle(&mut state.form, outcome, &mut state.toasts);
        state.pending_since = None;
    }
}

impl Drop for App {
    /// An outcome arriving after teardown must never be applied
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            tracing::debug!("Aborting outstanding submission");
            handle.abort();
        }
    }
}
