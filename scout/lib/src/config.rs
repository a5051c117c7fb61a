//! Client configuration for the ScrapingDog LinkedIn endpoint.
//!
//! The API key is never embedded in the binary. It is injected either
//! explicitly through [`ScoutConfig::new`] or from the environment through
//! [`ScoutConfig::from_env`].
//!
//! ## Environment
//!
//! - `SCRAPINGDOG_API_KEY` (required): API key for authentication
//! - `SCRAPINGDOG_ENDPOINT` (optional): overrides [`DEFAULT_ENDPOINT`]
//! - `SCRAPINGDOG_TIMEOUT_SECS` (optional): request timeout in whole seconds

use std::env;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, ScoutError};

/// The ScrapingDog LinkedIn endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.scrapingdog.com/linkedin";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SCRAPINGDOG_API_KEY";

/// Environment variable overriding the endpoint URL.
pub const ENDPOINT_ENV: &str = "SCRAPINGDOG_ENDPOINT";

/// Environment variable holding an optional timeout in seconds.
pub const TIMEOUT_ENV: &str = "SCRAPINGDOG_TIMEOUT_SECS";

/// Endpoint, credential and transport settings for a [`ScoutClient`](crate::ScoutClient).
///
/// ## Examples
///
/// ```
/// use scout_lib::ScoutConfig;
/// use std::time::Duration;
///
/// let config = ScoutConfig::new("my-key")
///     .with_endpoint("http://localhost:8080/linkedin")
///     .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(config.endpoint(), "http://localhost:8080/linkedin");
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone)]
pub struct ScoutConfig {
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
}

impl ScoutConfig {
    /// Create configuration with an explicit API key and the default endpoint.
    ///
    /// No timeout is set; the request waits as long as the transport allows.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Create configuration from process environment variables.
    ///
    /// ## Errors
    ///
    /// - `ScoutError::MissingApiKey` if `SCRAPINGDOG_API_KEY` is unset or blank
    /// - `ScoutError::InvalidConfig` if `SCRAPINGDOG_TIMEOUT_SECS` is not a number
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// [`from_env`](Self::from_env) is this function over `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ScoutError::MissingApiKey)?;

        let mut config = Self::new(api_key.trim());

        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.trim().is_empty()) {
            debug!(endpoint = %endpoint, "Using endpoint from environment");
            config = config.with_endpoint(endpoint.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            let secs = parse_timeout_secs(&raw)?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set a custom endpoint (useful for testing).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The request timeout, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for ScoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoutConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Parse a timeout given in whole seconds.
///
/// Zero is rejected: reqwest would fail every request immediately.
pub fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        ScoutError::InvalidConfig(format!("timeout must be a whole number of seconds, got '{raw}'"))
    })?;
    if secs == 0 {
        return Err(ScoutError::InvalidConfig(
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(secs)
}
