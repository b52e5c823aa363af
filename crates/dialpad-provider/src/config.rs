//! Provider configuration.
//!
//! Values come from an explicit configuration (decoded from JSON or built in
//! code), with the environment as fallback. `resolve` validates the result
//! into the options the client is built from.

use std::path::Path;

use dialpad_client::{ClientOptions, DEFAULT_BASE_URL};
use dialpad_core::Sensitive;
use reqwest::Url;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DIALPAD_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "DIALPAD_BASE_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "DIALPAD_TIMEOUT_SECONDS";

/// Provider configuration as supplied by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Dialpad API key. Required after resolution; sensitive.
    #[serde(default)]
    pub api_key: Option<Sensitive>,

    /// API base URL (default: `https://dialpad.com/api/v2`).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: 30).
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Validated configuration, ready to build a client from.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// API key.
    pub api_key: Sensitive,
    /// Client options.
    pub options: ClientOptions,
}

impl ProviderConfig {
    /// Create an empty configuration; everything falls back to the
    /// environment or defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<Sensitive>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not decode.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded Dialpad provider configuration from file");
        Ok(config)
    }

    /// Validate, falling back to the process environment for unset values.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available or a value is invalid.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Validate, falling back to `lookup` for unset values.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available or a value is invalid.
    pub fn resolve_with<F>(self, lookup: F) -> Result<ResolvedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .or_else(|| lookup(API_KEY_ENV).and_then(Sensitive::non_empty))
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = self
            .base_url
            .or_else(|| lookup(BASE_URL_ENV).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        let timeout_seconds = match self.timeout_seconds {
            Some(seconds) => seconds,
            None => match lookup(TIMEOUT_ENV).filter(|v| !v.is_empty()) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    name: TIMEOUT_ENV,
                    value: raw.clone(),
                })?,
                None => ClientOptions::default().timeout_seconds,
            },
        };
        if timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                name: "timeout_seconds",
                value: timeout_seconds.to_string(),
            });
        }

        tracing::debug!(
            base_url = %base_url,
            timeout_seconds,
            "Dialpad provider configuration resolved"
        );

        Ok(ResolvedConfig {
            api_key,
            options: ClientOptions::with_base_url(base_url).timeout_seconds(timeout_seconds),
        })
    }
}

fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }
    Ok(())
}
