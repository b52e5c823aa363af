//! Call-event subscription records and their wire payloads.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::ResourceId;
use crate::webhook::WebhookResponse;

/// Body of `POST /subscriptions/call` and `PATCH /subscriptions/call/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSubscriptionRequest {
    /// Call states to be notified about.
    pub call_states: Vec<String>,
    /// Identifier of the webhook events are delivered to.
    pub endpoint_id: ResourceId,
}

/// Call subscription as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallSubscriptionResponse {
    /// Server-assigned identifier.
    pub id: ResourceId,
    /// Subscribed call states.
    #[serde(default)]
    pub call_states: Vec<String>,
    /// The webhook the subscription delivers to.
    pub webhook: WebhookResponse,
}

/// Local record of a `dialpad_call_subscription` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSubscription {
    /// Server-assigned identifier; `None` until created or after deletion.
    pub id: Option<ResourceId>,
    /// Call states of interest. Unordered, unique.
    pub call_states: BTreeSet<String>,
    /// Webhook the subscription is bound to.
    pub endpoint_id: ResourceId,
}

impl CallSubscription {
    /// A new, not yet created subscription.
    #[must_use]
    pub fn new<I, S>(call_states: I, endpoint_id: ResourceId) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            call_states: call_states.into_iter().map(Into::into).collect(),
            endpoint_id,
        }
    }

    /// A record that only knows its identifier, to be filled by a read.
    ///
    /// The endpoint is a placeholder equal to the subscription ID until the
    /// read replaces it.
    #[must_use]
    pub fn imported(id: ResourceId) -> Self {
        Self {
            endpoint_id: id.clone(),
            id: Some(id),
            call_states: BTreeSet::new(),
        }
    }

    /// Request payload for create and update.
    #[must_use]
    pub fn to_request(&self) -> CallSubscriptionRequest {
        CallSubscriptionRequest {
            call_states: self.call_states.iter().cloned().collect(),
            endpoint_id: self.endpoint_id.clone(),
        }
    }

    /// Overwrite every tracked field with the server's view.
    ///
    /// The endpoint comes from the nested webhook descriptor.
    pub fn apply(&mut self, response: CallSubscriptionResponse) {
        self.id = Some(response.id);
        self.call_states = response.call_states.into_iter().collect();
        self.endpoint_id = response.webhook.id;
    }
}
