//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NOWAPP_API_BASE_URL` - Backend origin (default: `http://localhost:8000`)
//! - `NOWAPP_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 10)
//! - `NOWAPP_CREDENTIAL_FILE` - Path of the stored credential
//!   (default: `.nowapp-credential`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend origin, matching the demo deployment.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Explicit request timeout. The original inherited the platform default;
/// here it is configured and documented.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default location of the persisted credential, the analog of the
/// browser's key-value storage entry.
const DEFAULT_CREDENTIAL_FILE: &str = ".nowapp-credential";

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL could not be parsed.
    #[error("invalid {0}: {1}")]
    InvalidUrl(&'static str, #[source] url::ParseError),

    /// Timeout value was not a positive integer.
    #[error("invalid {0}: expected a positive number of seconds, got {1:?}")]
    InvalidTimeout(&'static str, String),
}

/// Front-end configuration shared by the API client and the session store.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Backend origin all `/api/...` paths are resolved against.
    pub api_base_url: Url,
    /// Timeout applied to every outbound request.
    pub http_timeout: Duration,
    /// File the bearer credential is persisted to between page loads.
    pub credential_file: PathBuf,
}

impl FrontendConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("NOWAPP_API_BASE_URL", DEFAULT_API_BASE_URL);
        let timeout = std::env::var("NOWAPP_HTTP_TIMEOUT_SECS").ok();
        let credential_file =
            get_env_or_default("NOWAPP_CREDENTIAL_FILE", DEFAULT_CREDENTIAL_FILE);

        Self::from_parts(&base_url, timeout.as_deref(), credential_file)
    }

    /// Build a configuration from raw values (used by `from_env` and tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or timeout is malformed.
    pub fn from_parts(
        base_url: &str,
        timeout_secs: Option<&str>,
        credential_file: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl("NOWAPP_API_BASE_URL", e))?;

        let http_timeout = match timeout_secs {
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidTimeout("NOWAPP_HTTP_TIMEOUT_SECS", raw.to_string())
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(
                        "NOWAPP_HTTP_TIMEOUT_SECS",
                        raw.to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            api_base_url,
            http_timeout,
            credential_file: credential_file.into(),
        })
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
