//! Dialpad API client.
//!
//! This crate provides the authenticated HTTP client shared by the Dialpad
//! resources. It injects bearer authentication and JSON headers, returns raw
//! response bytes on success, and classifies error responses into
//! [`ClientError`].
//!
//! # Example
//!
//! ```no_run
//! use dialpad_client::{DialpadClient, Method};
//! use dialpad_core::WebhookResponse;
//!
//! # async fn example() -> Result<(), dialpad_client::ClientError> {
//! let client = DialpadClient::new("your-api-key")?;
//!
//! let request = client.build(Method::GET, "/webhooks/42", None)?;
//! let body = client.execute(request).await?;
//! let webhook: WebhookResponse = dialpad_client::decode(&body)?;
//!
//! println!("Webhook {} delivers to {}", webhook.id, webhook.hook_url);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod client;
mod error;

pub use classify::classify;
pub use client::{decode, ClientOptions, DialpadClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use reqwest::Method;
