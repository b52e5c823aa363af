//! `dialpad_webhook` resource.

use std::sync::Arc;

use async_trait::async_trait;
use dialpad_client::DialpadClient;
use dialpad_core::{ResourceId, Webhook, WebhookResponse};
use tracing::{debug, info, instrument};

use crate::error::ProviderError;
use crate::resource::{require_id, Resource};

const COLLECTION_PATH: &str = "/webhooks";

fn item_path(id: &ResourceId) -> String {
    format!("{COLLECTION_PATH}/{id}")
}

/// Maps [`Webhook`] records to `/webhooks`.
#[derive(Debug, Clone)]
pub struct WebhookResource {
    client: Arc<DialpadClient>,
}

impl WebhookResource {
    /// Create the mapper over a shared client.
    #[must_use]
    pub fn new(client: Arc<DialpadClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for WebhookResource {
    type State = Webhook;

    const TYPE_NAME: &'static str = "dialpad_webhook";

    #[instrument(skip(self, state))]
    async fn create(&self, state: &mut Webhook) -> Result<(), ProviderError> {
        let created: WebhookResponse = self
            .client
            .post(COLLECTION_PATH, &state.to_request())
            .await?;

        info!(id = %created.id, "Webhook created");
        state.id = Some(created.id);

        self.read(state).await
    }

    #[instrument(skip(self, state))]
    async fn read(&self, state: &mut Webhook) -> Result<(), ProviderError> {
        let path = item_path(require_id(state.id.as_ref(), Self::TYPE_NAME)?);

        let webhook: WebhookResponse = self.client.get(&path).await?;

        debug!(id = %webhook.id, "Webhook refreshed");
        state.apply(webhook);
        Ok(())
    }

    #[instrument(skip(self, state))]
    async fn update(&self, state: &mut Webhook) -> Result<(), ProviderError> {
        let path = item_path(require_id(state.id.as_ref(), Self::TYPE_NAME)?);

        self.client.patch(&path, &state.to_request()).await?;

        info!(path = %path, "Webhook updated");
        self.read(state).await
    }

    #[instrument(skip(self, state))]
    async fn delete(&self, state: &mut Webhook) -> Result<(), ProviderError> {
        let path = item_path(require_id(state.id.as_ref(), Self::TYPE_NAME)?);

        self.client.delete(&path).await?;

        info!(path = %path, "Webhook deleted");
        state.id = None;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn import(&self, id: ResourceId) -> Result<Webhook, ProviderError> {
        let mut state = Webhook::imported(id);
        self.read(&mut state).await?;
        Ok(state)
    }
}
