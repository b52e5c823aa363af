//! Error types for the Dialpad provider.

use dialpad_client::ClientError;

/// Errors surfaced by provider configuration and resource operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The provider configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The operation needs a resource identifier and the record has none.
    #[error("{resource} has no identifier: it was never created or has been deleted")]
    MissingId {
        /// Resource type name.
        resource: &'static str,
    },
}

impl ProviderError {
    /// Whether the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_not_found())
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key was configured and the environment fallback is unset.
    #[error("api_key is not set and DIALPAD_API_KEY is empty or missing")]
    MissingApiKey,

    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A setting has a value that cannot be used.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Setting name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for this provider.
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}
