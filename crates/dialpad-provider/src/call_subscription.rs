//! `dialpad_call_subscription` resource.

use std::sync::Arc;

use async_trait::async_trait;
use dialpad_client::DialpadClient;
use dialpad_core::{CallSubscription, CallSubscriptionResponse, ResourceId};
use tracing::{debug, info, instrument};

use crate::error::ProviderError;
use crate::resource::{require_id, Resource};

const COLLECTION_PATH: &str = "/subscriptions/call";

fn item_path(id: &ResourceId) -> String {
    format!("{COLLECTION_PATH}/{id}")
}

/// Maps [`CallSubscription`] records to `/subscriptions/call`.
#[derive(Debug, Clone)]
pub struct CallSubscriptionResource {
    client: Arc<DialpadClient>,
}

impl CallSubscriptionResource {
    /// Create the mapper over a shared client.
    #[must_use]
    pub fn new(client: Arc<DialpadClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for CallSubscriptionResource {
    type State = CallSubscription;

    const TYPE_NAME: &'static str = "dialpad_call_subscription";

    #[instrument(skip(self, state))]
    async fn create(&self, state: &mut CallSubscription) -> Result<(), ProviderError> {
        let created: CallSubscriptionResponse = self
            .client
            .post(COLLECTION_PATH, &state.to_request())
            .await?;

        info!(
            id = %created.id,
            endpoint_id = %state.endpoint_id,
            "Call subscription created"
        );
        state.id = Some(created.id);

        self.read(state).await
    }

    #[instrument(skip(self, state))]
    async fn read(&self, state: &mut CallSubscription) -> Result<(), ProviderError> {
        let path = item_path(require_id(state.id.as_ref(), Self::TYPE_NAME)?);

        let subscription: CallSubscriptionResponse = self.client.get(&path).await?;

        debug!(
            id = %subscription.id,
            states = subscription.call_states.len(),
            "Call subscription refreshed"
        );
        state.apply(subscription);
        Ok(())
    }

    #[instrument(skip(self, state))]
    async fn update(&self, state: &mut CallSubscription) -> Result<(), ProviderError> {
        let path = item_path(require_id(state.id.as_ref(), Self::TYPE_NAME)?);

        self.client.patch(&path, &state.to_request()).await?;

        info!(path = %path, "Call subscription updated");
        self.read(state).await
    }

    #[instrument(skip(self, state))]
    async fn delete(&self, state: &mut CallSubscription) -> Result<(), ProviderError> {
        let path = item_path(require_id(state.id.as_ref(), Self::TYPE_NAME)?);

        self.client.delete(&path).await?;

        info!(path = %path, "Call subscription deleted");
        state.id = None;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn import(&self, id: ResourceId) -> Result<CallSubscription, ProviderError> {
        let mut state = CallSubscription::imported(id);
        self.read(&mut state).await?;
        Ok(state)
    }
}
