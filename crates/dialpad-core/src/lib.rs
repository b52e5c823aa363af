//! Core types for the Dialpad provider.
//!
//! This crate provides the data shared by the client and the resource
//! mappers. It performs no I/O.
//!
//! - **Identifiers**: `ResourceId`
//! - **Secrets**: `Sensitive`, a redacting string wrapper
//! - **Webhooks**: `Webhook`, `WebhookRequest`, `WebhookResponse`, `Signature`
//! - **Call subscriptions**: `CallSubscription`, `CallSubscriptionRequest`,
//!   `CallSubscriptionResponse`
//! - **Errors**: `ApiErrorResponse`, the error body of failing API calls

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod call_subscription;
pub mod error;
pub mod ids;
pub mod sensitive;
pub mod webhook;

pub use call_subscription::{CallSubscription, CallSubscriptionRequest, CallSubscriptionResponse};
pub use error::{ApiErrorBody, ApiErrorResponse};
pub use ids::{IdError, ResourceId};
pub use sensitive::Sensitive;
pub use webhook::{Signature, Webhook, WebhookRequest, WebhookResponse};
