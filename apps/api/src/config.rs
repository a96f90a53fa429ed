use std::time::Duration;

use anyhow::{Context, Result};

use crate::document_store::DocumentStoreConfig;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Skills has good static defaults, so a slow backend must not stall the section.
pub const DEFAULT_SKILLS_TIMEOUT_MS: u64 = 1_500;
pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com";

/// Application configuration loaded from environment variables.
///
/// Every data source is optional: with nothing configured the service answers
/// from the bundled static defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Option<String>,
    pub github_username: Option<String>,
    pub firebase_api_key: Option<String>,
    pub firebase_auth_domain: Option<String>,
    pub firebase_project_id: Option<String>,
    pub firebase_app_id: Option<String>,
    pub firestore_endpoint: String,
    pub request_timeout: Duration,
    pub skills_timeout: Duration,
    pub admin_token: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_url: optional_env("BACKEND_URL"),
            github_username: optional_env("GITHUB_USERNAME"),
            firebase_api_key: optional_env("FIREBASE_API_KEY"),
            firebase_auth_domain: optional_env("FIREBASE_AUTH_DOMAIN"),
            firebase_project_id: optional_env("FIREBASE_PROJECT_ID"),
            firebase_app_id: optional_env("FIREBASE_APP_ID"),
            firestore_endpoint: optional_env("FIRESTORE_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_FIRESTORE_ENDPOINT.to_string()),
            request_timeout: millis_env("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?,
            skills_timeout: millis_env("SKILLS_TIMEOUT_MS", DEFAULT_SKILLS_TIMEOUT_MS)?,
            admin_token: optional_env("ADMIN_TOKEN"),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// The credential bundle for the document store, or `None` when any part is missing.
    pub fn document_store(&self) -> Option<DocumentStoreConfig> {
        DocumentStoreConfig::from_parts(
            self.firebase_api_key.as_deref(),
            self.firebase_auth_domain.as_deref(),
            self.firebase_project_id.as_deref(),
            self.firebase_app_id.as_deref(),
            &self.firestore_endpoint,
        )
    }
}

impl Default for Config {
    /// Static mode: no backend, no GitHub, no document store.
    fn default() -> Self {
        Self {
            backend_url: None,
            github_username: None,
            firebase_api_key: None,
            firebase_auth_domain: None,
            firebase_project_id: None,
            firebase_app_id: None,
            firestore_endpoint: DEFAULT_FIRESTORE_ENDPOINT.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            skills_timeout: Duration::from_millis(DEFAULT_SKILLS_TIMEOUT_MS),
            admin_token: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads a variable, treating blank values the same as missing ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn millis_env(key: &str, default: u64) -> Result<Duration> {
    let millis = match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a number of milliseconds"))?,
        None => default,
    };
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_static_mode() {
        let config = Config::default();
        assert!(config.backend_url.is_none());
        assert!(config.github_username.is_none());
        assert!(config.document_store().is_none());
        assert_eq!(config.skills_timeout, Duration::from_millis(1_500));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_partial_credentials_leave_store_unconfigured() {
        let config = Config {
            firebase_api_key: Some("key".to_string()),
            firebase_project_id: Some("folio".to_string()),
            firebase_app_id: Some("1:2:web:3".to_string()),
            ..Config::default()
        };
        assert!(config.document_store().is_none());
    }

    #[test]
    fn test_full_credentials_configure_store() {
        let config = Config {
            firebase_api_key: Some("key".to_string()),
            firebase_auth_domain: Some("folio.firebaseapp.com".to_string()),
            firebase_project_id: Some("folio".to_string()),
            firebase_app_id: Some("1:2:web:3".to_string()),
            ..Config::default()
        };
        let store = config.document_store().unwrap();
        assert_eq!(store.project_id, "folio");
    }

    #[test]
    fn test_blank_port_and_log_filter_use_defaults() {
        // only test in the crate touching these variables
        std::env::set_var("PORT", "");
        std::env::set_var("RUST_LOG", "  ");
        let config = Config::from_env().unwrap();
        std::env::remove_var("PORT");
        std::env::remove_var("RUST_LOG");

        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }
}
