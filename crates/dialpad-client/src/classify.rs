//! Mapping of raw responses to payloads or errors.

use bytes::Bytes;
use dialpad_core::ApiErrorResponse;
use reqwest::StatusCode;

use crate::error::ClientError;

/// Classify a fully-read response.
///
/// Statuses below 400 pass the body through untouched. Anything else is an
/// error: `Api` when the body is an error envelope, `MalformedErrorResponse`
/// otherwise.
///
/// # Errors
///
/// Returns an error for every status of 400 or above.
pub fn classify(status: StatusCode, body: Bytes) -> Result<Bytes, ClientError> {
    if status.as_u16() < 400 {
        return Ok(body);
    }

    match serde_json::from_slice::<ApiErrorResponse>(&body) {
        Ok(envelope) => Err(ClientError::Api {
            status: status.as_u16(),
            code: envelope.error.code,
            message: envelope.error.message,
        }),
        Err(source) => Err(ClientError::MalformedErrorResponse {
            status: status.as_u16(),
            source,
        }),
    }
}
