//! Notification capability used by the submission flow

/// Shows the outcome of a submission to the user
pub trait Notifier {
    fn notify_success(&mut self, message: &str);
    fn notify_failure(&mut self, message: &str);
}
