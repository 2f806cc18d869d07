//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLEMENTINE_API_BASE_URL` - Backend API base URL, including the API
//!   prefix (default: `http://localhost:8080/api`)
//! - `CLEMENTINE_SESSION_FILE` - Path of the durable session file
//!   (default: `.clementine-session.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_SESSION_FILE: &str = ".clementine-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL without a trailing slash.
    pub base_url: String,
    /// Path of the durable session file (token and user profile).
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is not a valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_env_or_default(
            "CLEMENTINE_API_BASE_URL",
            DEFAULT_BASE_URL,
        ))?;
        let session_file =
            PathBuf::from(get_env_or_default("CLEMENTINE_SESSION_FILE", DEFAULT_SESSION_FILE));

        Ok(Self {
            base_url,
            session_file,
        })
    }

    /// Build a configuration directly, validating the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is not a valid absolute URL.
    pub fn new(base_url: &str, session_file: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            session_file: session_file.into(),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate the base URL and strip any trailing slash so endpoint paths
/// can be appended verbatim.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| {
        ConfigError::InvalidEnvVar("CLEMENTINE_API_BASE_URL".to_string(), e.to_string())
    })?;
    if !url.has_host() {
        return Err(ConfigError::InvalidEnvVar(
            "CLEMENTINE_API_BASE_URL".to_string(),
            "URL must have a host".to_string(),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_strips_trailing_slash() {
        let url = parse_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(url, "http://localhost:8080/api");
    }

    #[test]
    fn test_parse_base_url_keeps_path() {
        let url = parse_base_url("https://shop.example.com/api").unwrap();
        assert_eq!(url, "https://shop.example.com/api");
    }

    #[test]
    fn test_parse_base_url_rejects_relative() {
        assert!(parse_base_url("/api").is_err());
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_new_validates() {
        let config = ClientConfig::new("http://localhost:8080/api/", "session.json").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.session_file, PathBuf::from("session.json"));
    }
}
