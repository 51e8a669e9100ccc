//! reqwest client for `POST /user/contact`
//!
//! The client keeps a cookie store so a session cookie issued by the backend
//! is sent along with every message.

use super::traits::{ContactBackend, SendError};
use crate::state::ContactMessage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

/// Path of the contact endpoint relative to the backend base URL
pub const CONTACT_PATH: &str = "/user/contact";

/// Client for the contact endpoint
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Create a client posting to `{base_url}/user/contact`
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactBackend for ContactClient {
    async fn send_message(&self, message: &ContactMessage) -> Result<StatusCode, SendError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting contact message");

        let response = self.http.post(&self.endpoint).json(message).send().await?;
        let status = response.status();

        tracing::debug!(%status, "Contact endpoint responded");
        Ok(status)
    }
}
