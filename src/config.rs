//! Configuration handling for the TUI

use crate::state::{CurrentUser, DEFAULT_TOAST_DURATION};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the backend base URL
pub const BACKEND_URL_ENV: &str = "CONTACT_BACKEND_URL";

/// Backend used when nothing is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Base URL of the backend, without the `/user/contact` path
    pub backend_url: Option<String>,
    /// How long toasts stay visible
    pub toast_duration_ms: Option<u64>,
    /// Signed-in user to greet
    pub current_user: Option<CurrentUser>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Backend URL: environment first, then config file, then default
    pub fn backend_url(&self) -> String {
        self.backend_url_with_env(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn backend_url_with_env(&self, env: Option<String>) -> String {
        env.filter(|url| !url.trim().is_empty())
            .or_else(|| self.backend_url.clone())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactConfig::default();
        assert!(config.backend_url.is_none());
        assert!(config.toast_duration_ms.is_none());
        assert!(config.current_user.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = ContactConfig {
            backend_url: Some("https://api.example.com".to_string()),
            toast_duration_ms: Some(2500),
            current_user: Some(CurrentUser {
                username: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
            }),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ContactConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.backend_url,
            Some("https://api.example.com".to_string())
        );
        assert_eq!(parsed.toast_duration_ms, Some(2500));
        assert_eq!(parsed.current_user, config.current_user);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ContactConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.backend_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"backend_url": "http://x", "unknown_field": "value"}"#;
        let parsed: ContactConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.backend_url, Some("http://x".to_string()));
    }

    #[test]
    fn test_backend_url_default() {
        let config = ContactConfig::default();
        assert_eq!(config.backend_url_with_env(None), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_backend_url_from_file() {
        let config = ContactConfig {
            backend_url: Some("http://file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_url_with_env(None), "http://file");
    }

    #[test]
    fn test_env_overrides_file() {
        let config = ContactConfig {
            backend_url: Some("http://file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.backend_url_with_env(Some("http://env".to_string())),
            "http://env"
        );
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = ContactConfig::default();
        assert_eq!(
            config.backend_url_with_env(Some("  ".to_string())),
            DEFAULT_BACKEND_URL
        );
    }

    #[test]
    fn test_toast_duration() {
        assert_eq!(
            ContactConfig::default().toast_duration(),
            DEFAULT_TOAST_DURATION
        );
        let config = ContactConfig {
            toast_duration_ms: Some(1500),
            ..Default::default()
        };
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_returns_ok() {
        // Load should return default config when file doesn't exist
        let result = ContactConfig::load();
        assert!(result.is_ok());
    }
}
