//! Client error types.


/// Errors that can occur when using the Dialpad client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be built (invalid URL).
    #[error("invalid request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    /// Network failure: DNS, connection refused, timeout, body read.
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with an error status and a well-formed error body.
    #[error("Dialpad error: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error code from the body.
        code: i64,
        /// Error message from the body, verbatim.
        message: String,
    },

    /// The API answered with an error status and a body that is not an
    /// error envelope.
    #[error("malformed error response (HTTP {status}): {source}")]
    MalformedErrorResponse {
        /// HTTP status code.
        status: u16,
        /// Why the body could not be parsed.
        source: serde_json::Error,
    },

    /// A successful response body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of the failing response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::MalformedErrorResponse { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
