//! Provider entry point: configuration to shared client to resources.

use std::sync::Arc;

use dialpad_client::DialpadClient;

use crate::call_subscription::CallSubscriptionResource;
use crate::config::{ProviderConfig, ResolvedConfig};
use crate::error::ProviderError;
use crate::resource::Resource;
use crate::webhook::WebhookResource;

/// A configured Dialpad provider.
///
/// Holds the one client built from the provider configuration. Resource
/// mappers handed out by the provider share that client; nothing about it
/// changes after construction.
#[derive(Debug, Clone)]
pub struct Provider {
    client: Arc<DialpadClient>,
}

impl Provider {
    /// Resource types this provider manages.
    pub const RESOURCE_TYPES: [&'static str; 2] = [
        WebhookResource::TYPE_NAME,
        CallSubscriptionResource::TYPE_NAME,
    ];

    /// Resolve `config` (with environment fallback) and build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the client
    /// cannot be built.
    pub fn configure(config: ProviderConfig) -> Result<Self, ProviderError> {
        Self::new(config.resolve()?)
    }

    /// Build the provider from an already resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn new(config: ResolvedConfig) -> Result<Self, ProviderError> {
        tracing::info!(base_url = %config.options.base_url, "Configuring Dialpad provider");
        let client = DialpadClient::with_options(config.api_key, config.options)?;
        Ok(Self::from_client(client))
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: DialpadClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The shared client.
    #[must_use]
    pub fn client(&self) -> &Arc<DialpadClient> {
        &self.client
    }

    /// Mapper for `dialpad_webhook`.
    #[must_use]
    pub fn webhooks(&self) -> WebhookResource {
        WebhookResource::new(Arc::clone(&self.client))
    }

    /// Mapper for `dialpad_call_subscription`.
    #[must_use]
    pub fn call_subscriptions(&self) -> CallSubscriptionResource {
        CallSubscriptionResource::new(Arc::clone(&self.client))
    }

    /// Whether `name` is a resource type this provider manages.
    #[must_use]
    pub fn supports(name: &str) -> bool {
        Self::RESOURCE_TYPES.iter().any(|t| *t == name)
    }
}
