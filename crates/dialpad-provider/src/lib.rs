//! Dialpad resources for infrastructure orchestration.
//!
//! This crate exposes the `dialpad_webhook` and `dialpad_call_subscription`
//! resource types. A [`Provider`] is configured once; the resource mappers it
//! hands out implement [`Resource`] and share its client.
//!
//! # Example
//!
//! ```no_run
//! use dialpad_core::Webhook;
//! use dialpad_provider::{Provider, ProviderConfig, Resource};
//!
//! # async fn example() -> Result<(), dialpad_provider::ProviderError> {
//! // API key falls back to DIALPAD_API_KEY when not set explicitly
//! let provider = Provider::configure(ProviderConfig::new())?;
//! let webhooks = provider.webhooks();
//!
//! let mut hook = Webhook::new("https://example.com/hook").with_secret("s3cr3t");
//! webhooks.create(&mut hook).await?;
//! println!("Created webhook {:?}", hook.id);
//!
//! webhooks.delete(&mut hook).await?;
//! assert!(hook.id.is_none());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod call_subscription;
mod config;
mod error;
mod provider;
mod resource;
mod webhook;

pub use call_subscription::CallSubscriptionResource;
pub use config::{ProviderConfig, ResolvedConfig, API_KEY_ENV, BASE_URL_ENV, TIMEOUT_ENV};
pub use error::{ConfigError, ProviderError};
pub use provider::Provider;
pub use resource::Resource;
pub use webhook::WebhookResource;
