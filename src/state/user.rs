//! Signed-in user supplied from outside the form

use serde::{Deserialize, Serialize};

/// Read-only identity of the current user, if any.
/// Only used for personalization; submitting never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn greeting(&self) -> String {
        match &self.email {
            Some(email) => format!("Signed in as {} <{email}>", self.username),
            None => format!("Signed in as {}", self.username),
        }
    }
}
