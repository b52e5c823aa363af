//! Error body returned by the Dialpad API on failing requests.

use serde::{Deserialize, Serialize};

/// Envelope of a failing response: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorBody,
}

/// Error details reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Numeric error code, usually mirroring the HTTP status.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}
