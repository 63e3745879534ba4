//! API endpoint configuration.
//!
//! The base URL and API version are resolved once from the environment at
//! startup and stay fixed for the process lifetime. A `.env` file is honored
//! if present.
//!
//! - `PLOTCHAIN_API_URL`: backend base URL (default `http://localhost:8000`)
//! - `PLOTCHAIN_API_VERSION`: version prefix (default `v1`)

use anyhow::{Context, Result};

/// Default backend endpoint for local development
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default API version prefix
const DEFAULT_API_VERSION: &str = "v1";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve configuration from the environment, falling back to the
    /// local development defaults.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var("PLOTCHAIN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_version = std::env::var("PLOTCHAIN_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        reqwest::Url::parse(&base_url)
            .with_context(|| format!("Invalid PLOTCHAIN_API_URL: {}", base_url))?;

        Ok(Self {
            base_url,
            api_version,
        })
    }

    /// Construct a config with an explicit base URL, keeping the default
    /// version prefix. Used by tests and by apps that manage their own
    /// endpoint selection.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full endpoint prefix: `<base_url>/<api_version>`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint(), "http://localhost:8000/v1");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("https://api.plotchain.io/");
        assert_eq!(config.endpoint(), "https://api.plotchain.io/v1");
    }

    #[test]
    fn test_with_base_url_keeps_default_version() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.api_version, "v1");
    }

    // Env vars are process-global, so every from_env scenario lives in one
    // test to keep the parallel test runner away from them.
    #[test]
    fn test_from_env_overrides_defaults_and_rejects_bad_url() {
        std::env::set_var("PLOTCHAIN_API_URL", "https://api.plotchain.io");
        std::env::set_var("PLOTCHAIN_API_VERSION", "v2");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.endpoint(), "https://api.plotchain.io/v2");

        std::env::set_var("PLOTCHAIN_API_URL", "not a url");
        let result = ApiConfig::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid PLOTCHAIN_API_URL"));

        std::env::remove_var("PLOTCHAIN_API_URL");
        std::env::remove_var("PLOTCHAIN_API_VERSION");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.endpoint(), "http://localhost:8000/v1");
    }
}
