//! Webhook records and their wire payloads.

use serde::{Deserialize, Serialize};

use crate::ids::ResourceId;
use crate::sensitive::Sensitive;

/// Signature descriptor returned by the API for a webhook.
///
/// Describes how Dialpad signs the payloads it posts to the hook URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    /// Signing algorithm (e.g. `HS256`).
    pub algo: String,
    /// Signing secret, empty when the webhook is unsigned.
    pub secret: String,
    /// Signature type (e.g. `jwt`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of `POST /webhooks` and `PATCH /webhooks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    /// URL Dialpad will deliver events to.
    pub hook_url: String,
    /// Signing secret, omitted when not configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Sensitive>,
}

/// Webhook as returned by the API.
///
/// Also appears nested inside call subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookResponse {
    /// Server-assigned identifier.
    pub id: ResourceId,
    /// Delivery URL; a response without it fails to decode.
    pub hook_url: String,
    /// Signature descriptor; `null` and absent are treated as unsigned.
    #[serde(default)]
    pub signature: Option<Signature>,
}

impl WebhookResponse {
    /// The signing secret, if the webhook has a non-empty one.
    #[must_use]
    pub fn secret(&self) -> Option<Sensitive> {
        self.signature
            .as_ref()
            .and_then(|s| Sensitive::non_empty(s.secret.clone()))
    }
}

/// Local record of a `dialpad_webhook` resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Webhook {
    /// Server-assigned identifier; `None` until created or after deletion.
    pub id: Option<ResourceId>,
    /// Delivery URL. Required.
    pub hook_url: String,
    /// Signing secret. Optional and sensitive.
    pub secret: Option<Sensitive>,
}

impl Webhook {
    /// A new, not yet created webhook.
    #[must_use]
    pub fn new(hook_url: impl Into<String>) -> Self {
        Self {
            id: None,
            hook_url: hook_url.into(),
            secret: None,
        }
    }

    /// Set the signing secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<Sensitive>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// A record that only knows its identifier, to be filled by a read.
    #[must_use]
    pub fn imported(id: ResourceId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Request payload for create and update.
    ///
    /// An empty secret is left out of the payload.
    #[must_use]
    pub fn to_request(&self) -> WebhookRequest {
        WebhookRequest {
            hook_url: self.hook_url.clone(),
            secret: self.secret.clone().filter(|s| !s.is_empty()),
        }
    }

    /// Overwrite every tracked field with the server's view.
    pub fn apply(&mut self, response: WebhookResponse) {
        self.secret = response.secret();
        self.hook_url = response.hook_url;
        self.id = Some(response.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_secret_has_no_secret_key() {
        let body = serde_json::to_value(Webhook::new("https://example.com/hook").to_request())
            .unwrap();
        assert_eq!(body, json!({ "hook_url": "https://example.com/hook" }));
    }

    #[test]
    fn request_with_empty_secret_has_no_secret_key() {
        let webhook = Webhook::new("https://example.com/hook").with_secret("");
        let body = serde_json::to_value(webhook.to_request()).unwrap();
        assert!(body.get("secret").is_none());
    }

    #[test]
    fn request_with_secret() {
        let webhook = Webhook::new("https://example.com/hook").with_secret("s3cr3t");
        let body = serde_json::to_value(webhook.to_request()).unwrap();
        assert_eq!(
            body,
            json!({ "hook_url": "https://example.com/hook", "secret": "s3cr3t" })
        );
    }

    #[test]
    fn response_decodes_signature() {
        let response: WebhookResponse = serde_json::from_value(json!({
            "id": "42",
            "hook_url": "https://example.com/hook",
            "signature": { "algo": "HS256", "secret": "abc", "type": "jwt" }
        }))
        .unwrap();

        let signature = response.signature.clone().unwrap();
        assert_eq!(signature.algo, "HS256");
        assert_eq!(signature.kind, "jwt");
        assert_eq!(response.secret().unwrap().expose(), "abc");
    }

    #[test]
    fn null_signature_is_unsigned() {
        let response: WebhookResponse = serde_json::from_value(json!({
            "id": "42",
            "hook_url": "https://example.com/hook",
            "signature": null
        }))
        .unwrap();
        assert!(response.secret().is_none());
    }

    #[test]
    fn response_without_hook_url_is_rejected() {
        let err = serde_json::from_value::<WebhookResponse>(json!({
            "id": "42",
            "signature": null
        }))
        .unwrap_err();
        assert!(err.to_string().contains("hook_url"));
    }

    #[test]
    fn apply_overwrites_local_fields() {
        let mut webhook = Webhook::new("https://old.example.com").with_secret("old");
        webhook.apply(WebhookResponse {
            id: "7".parse().unwrap(),
            hook_url: "https://new.example.com".to_string(),
            signature: Some(Signature::default()),
        });

        assert_eq!(webhook.id.as_ref().map(ResourceId::as_str), Some("7"));
        assert_eq!(webhook.hook_url, "https://new.example.com");
        assert!(webhook.secret.is_none());
    }
}
