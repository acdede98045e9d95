//! DocWal client configuration.
//!
//! Holds the base URL, institution API key, and request timeout. Defaults
//! point to the production API. Override via environment variables or
//! explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://docwal.com/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the DocWal API.
///
/// Custom `Debug` implementation redacts the `api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct DocWalConfig {
    /// API base URL. Default: <https://docwal.com/api>
    pub base_url: Url,
    /// Institution API key, sent as `X-API-Key` on every request.
    pub api_key: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for DocWalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocWalConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DocWalConfig {
    /// Create a configuration with production defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the compiled-in default base
    /// URL fails to parse (should not occur, but avoids `expect()`).
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("base_url", DEFAULT_BASE_URL)?,
            api_key: Zeroizing::new(api_key.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `DOCWAL_API_KEY` (required)
    /// - `DOCWAL_BASE_URL` (default: `https://docwal.com/api`)
    /// - `DOCWAL_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("DOCWAL_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        Ok(Self {
            base_url: env_url("DOCWAL_BASE_URL", DEFAULT_BASE_URL)?,
            api_key: Zeroizing::new(api_key),
            timeout_secs: std::env::var("DOCWAL_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    pub fn local_mock(port: u16, api_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("local_mock", &format!("http://127.0.0.1:{port}"))?,
            api_key: Zeroizing::new(api_key.to_string()),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn parse_url(context: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(context.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DOCWAL_API_KEY environment variable (or an explicit API key) is required")]
    MissingApiKey,
    #[error("API key contains characters not permitted in an HTTP header")]
    InvalidApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
