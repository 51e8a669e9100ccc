//! Submission flow: guard, send, settle, notify

mod controller;
mod notifier;

pub use controller::{
    send, settle, submit, FailureReason, Outcome, FAILURE_MESSAGE, SUCCESS_MESSAGE,
    TRANSPORT_FAILURE_MESSAGE,
};
pub use notifier::Notifier;
