//! Client configuration.
//!
//! Configuration is read from environment variables:
//! - `TASKRANK_API_BASE` - Optional. Base URL of the prioritization service.
//!   Defaults to `http://127.0.0.1:8000`.
//! - `TASKRANK_TIMEOUT_SECS` - Optional. Transport timeout in whole seconds.
//!   Unset means the HTTP client waits indefinitely.

use crate::prioritization::ports::Endpoint;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable holding the service base URL.
pub const API_BASE_ENV: &str = "TASKRANK_API_BASE";

/// Environment variable holding the transport timeout in seconds.
pub const TIMEOUT_ENV: &str = "TASKRANK_TIMEOUT_SECS";

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL does not parse.
    #[error("invalid service base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// Value as configured.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The base URL is not http or https.
    #[error("unsupported scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid value for TASKRANK_TIMEOUT_SECS: '{0}', expected a positive integer")]
    InvalidTimeout(String),

    /// An endpoint path could not be joined onto the base URL.
    #[error("cannot build URL for endpoint {endpoint}: {reason}")]
    InvalidEndpoint {
        /// Endpoint path.
        endpoint: Endpoint,
        /// Parser message.
        reason: String,
    },
}

/// Settings for reaching the prioritization service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with no timeout.
    ///
    /// A trailing slash is added to the base path so endpoint paths are
    /// appended rather than replacing the last segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value does not parse
    /// as an absolute URL and [`ConfigError::UnsupportedScheme`] for schemes
    /// other than http and https.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url.trim()).map_err(|err| ConfigError::InvalidBaseUrl {
            value: base_url.to_owned(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_owned()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    /// Sets the transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let base = read(API_BASE_ENV).unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let timeout = read(TIMEOUT_ENV)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(Self {
            timeout,
            ..Self::new(&base)?
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the transport timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the absolute URL of `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] when the path cannot be
    /// joined onto the base URL.
    pub fn endpoint(&self, endpoint: Endpoint) -> Result<Url, ConfigError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|err| ConfigError::InvalidEndpoint {
                endpoint,
                reason: err.to_string(),
            })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
