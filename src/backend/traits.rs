//! Trait abstraction for the contact backend to enable mocking in tests

use crate::state::ContactMessage;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// The request never produced an HTTP response
#[derive(Debug, Error)]
pub enum SendError {
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Trait for posting contact messages, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactBackend: Send + Sync {
    /// Post one message and return the HTTP status of the response.
    /// The response body is not inspected.
    async fn send_message(&self, message: &ContactMessage) -> Result<StatusCode, SendError>;
}
