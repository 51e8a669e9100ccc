//! Submission controller
//!
//! A submission is split in three steps so the event loop can keep drawing
//! while the request is in flight:
//!
//! 1. [`ContactForm::begin_submit`] validates and moves the form to `Pending`
//! 2. [`send`] performs the single POST and classifies the result
//! 3. [`settle`] applies the outcome, notifies and returns the form to `Idle`
//!
//! [`submit`] runs all three inline.

use super::notifier::Notifier;
use crate::backend::ContactBackend;
use crate::state::{ContactForm, ContactMessage};
use reqwest::StatusCode;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
/// Shown when the backend answered with anything but 200
pub const FAILURE_MESSAGE: &str = "Failed to send message.";
/// Shown when no response was received at all
pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The backend responded with a non-200 status
    Rejected(StatusCode),
    /// The request failed before a response arrived
    Transport(String),
}

impl FailureReason {
    /// Message shown to the user. Status codes are never exposed.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected(_) => FAILURE_MESSAGE,
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(FailureReason),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Post the message once and classify the result. Never retries.
pub async fn send(backend: &dyn ContactBackend, message: &ContactMessage) -> Outcome {
    match backend.send_message(message).await {
        Ok(status) if status == StatusCode::OK => {
            tracing::info!("Contact message sent");
            Outcome::Success
        }
        Ok(status) => {
            tracing::warn!(%status, "Contact endpoint rejected message");
            Outcome::Failure(FailureReason::Rejected(status))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to reach contact endpoint");
            Outcome::Failure(FailureReason::Transport(err.to_string()))
        }
    }
}

/// Apply a settled outcome to the form.
///
/// Success clears the form; failure keeps the values so nothing has to be
/// retyped. The form is always back to `Idle` afterwards.
pub fn settle(form: &mut ContactForm, outcome: &Outcome, notifier: &mut dyn Notifier) {
    match outcome {
        Outcome::Success => {
            form.reset();
            notifier.notify_success(SUCCESS_MESSAGE);
        }
        Outcome::Failure(reason) => notifier.notify_failure(reason.user_message()),
    }
    form.finish_submit();
}

/// Validate, send and settle in one go.
///
/// Returns `None` without touching the network when the form is invalid or a
/// submission is already pending.
pub async fn submit(
    form: &mut ContactForm,
    backend: &dyn ContactBackend,
    notifier: &mut dyn Notifier,
) -> Option<Outcome> {
    let message = match form.begin_submit() {
        Ok(message) => message,
        Err(blocked) => {
            tracing::debug!(?blocked, "Submission blocked");
            return None;
        }
    };

    let outcome = send(backend, &message).await;
    settle(form, &outcome, notifier);
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockContactBackend, SendError};
    use crate::state::{Field, FormValues, SubmissionState};
    use pretty_assertions::assert_eq;
    use std::io;

    #[derive(Default)]
    struct RecordingNotifier {
        successes: Vec<String>,
        failures: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn notify_failure(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    fn valid_values() -> FormValues {
        FormValues::new(
            "Alice",
            "alice@example.com",
            "HelloHi12",
            "This message is definitely twenty+ chars",
        )
    }

    fn connection_refused() -> SendError {
        SendError::Transport(Box::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    #[tokio::test]
    async fn test_success_resets_form_and_notifies_once() {
        let mut backend = MockContactBackend::new();
        backend
            .expect_send_message()
            .withf(|m| m.username == "Alice" && m.msg_subject == "HelloHi12")
            .times(1)
            .returning(|_| Ok(StatusCode::OK));

        let mut form = ContactForm::with_values(valid_values());
        let mut notifier = RecordingNotifier::default();

        let outcome = submit(&mut form, &backend, &mut notifier).await;

        assert_eq!(outcome, Some(Outcome::Success));
        assert_eq!(form.values, FormValues::default());
        assert_eq!(form.submission(), SubmissionState::Idle);
        assert!(!form.submit_attempted());
        assert_eq!(notifier.successes, vec![SUCCESS_MESSAGE.to_string()]);
        assert!(notifier.failures.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_keeps_values_and_notifies_once() {
        let mut backend = MockContactBackend::new();
        backend
            .expect_send_message()
            .times(1)
            .returning(|_| Err(connection_refused()));

        let mut form = ContactForm::with_values(valid_values());
        let mut notifier = RecordingNotifier::default();

        let outcome = submit(&mut form, &backend, &mut notifier).await;

        assert!(matches!(
            outcome,
            Some(Outcome::Failure(FailureReason::Transport(_)))
        ));
        assert_eq!(form.values, valid_values());
        assert_eq!(form.submission(), SubmissionState::Idle);
        assert_eq!(
            notifier.failures,
            vec![TRANSPORT_FAILURE_MESSAGE.to_string()]
        );
        assert!(notifier.successes.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_status_is_failure() {
        for status in [
            StatusCode::CREATED,
            StatusCode::BAD_REQUEST,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let mut backend = MockContactBackend::new();
            backend
                .expect_send_message()
                .times(1)
                .returning(move |_| Ok(status));

            let mut form = ContactForm::with_values(valid_values());
            let mut notifier = RecordingNotifier::default();

            let outcome = submit(&mut form, &backend, &mut notifier).await;

            assert_eq!(
                outcome,
                Some(Outcome::Failure(FailureReason::Rejected(status)))
            );
            assert_eq!(form.values, valid_values());
            assert!(!form.is_pending());
            assert_eq!(notifier.failures, vec![FAILURE_MESSAGE.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        for field in Field::ALL {
            let mut backend = MockContactBackend::new();
            backend.expect_send_message().times(0);

            let mut values = valid_values();
            values.get_mut(field).clear();
            let mut form = ContactForm::with_values(values);
            let mut notifier = RecordingNotifier::default();

            let outcome = submit(&mut form, &backend, &mut notifier).await;

            assert_eq!(outcome, None, "{field:?}");
            assert!(form.submit_attempted());
            assert_eq!(form.visible_error(field), Some("Required".to_string()));
            assert!(notifier.successes.is_empty());
            assert!(notifier.failures.is_empty());
        }
    }

    #[tokio::test]
    async fn test_pending_form_never_reaches_backend() {
        let mut backend = MockContactBackend::new();
        backend.expect_send_message().times(0);

        let mut form = ContactForm::with_values(valid_values());
        form.begin_submit().unwrap();
        let mut notifier = RecordingNotifier::default();

        assert_eq!(submit(&mut form, &backend, &mut notifier).await, None);
        assert!(form.is_pending());
    }

    #[test]
    fn test_settle_failure_returns_to_idle() {
        let mut form = ContactForm::with_values(valid_values());
        form.begin_submit().unwrap();
        let mut notifier = RecordingNotifier::default();

        settle(
            &mut form,
            &Outcome::Failure(FailureReason::Transport("timeout".to_string())),
            &mut notifier,
        );

        assert_eq!(form.submission(), SubmissionState::Idle);
        assert_eq!(form.values, valid_values());
    }

    #[test]
    fn test_send_can_run_on_a_blocking_executor() {
        let mut backend = MockContactBackend::new();
        backend
            .expect_send_message()
            .returning(|_| Ok(StatusCode::OK));

        let message = valid_values().to_message();
        let outcome = tokio_test::block_on(send(&backend, &message));
        assert!(outcome.is_success());
    }

    #[test]
    fn test_user_messages_do_not_expose_status() {
        assert_eq!(
            FailureReason::Rejected(StatusCode::BAD_GATEWAY).user_message(),
            FAILURE_MESSAGE
        );
        assert_eq!(
            FailureReason::Transport("dns".to_string()).user_message(),
            TRANSPORT_FAILURE_MESSAGE
        );
    }
}
