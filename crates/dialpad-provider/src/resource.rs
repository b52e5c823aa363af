//! Lifecycle interface implemented by every Dialpad resource type.

use async_trait::async_trait;
use dialpad_core::ResourceId;

use crate::error::ProviderError;

/// Create/read/update/delete operations over a local record.
///
/// The orchestrator decides when each operation runs. Implementations treat
/// the API as the source of truth: `create` and `update` finish with a
/// `read`, and `read` overwrites every tracked field. A failing operation
/// leaves the record as it was, except that `create` keeps the identifier it
/// was assigned if the trailing read fails.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Local record type.
    type State: Send;

    /// Resource type name as exposed to the orchestrator.
    const TYPE_NAME: &'static str;

    /// Create the remote resource and assign its identifier to `state`.
    async fn create(&self, state: &mut Self::State) -> Result<(), ProviderError>;

    /// Refresh `state` from the remote resource.
    async fn read(&self, state: &mut Self::State) -> Result<(), ProviderError>;

    /// Push the mutable fields of `state` to the remote resource.
    async fn update(&self, state: &mut Self::State) -> Result<(), ProviderError>;

    /// Delete the remote resource and clear the identifier in `state`.
    async fn delete(&self, state: &mut Self::State) -> Result<(), ProviderError>;

    /// Adopt an existing remote resource by identifier.
    async fn import(&self, id: ResourceId) -> Result<Self::State, ProviderError>;
}

/// The identifier of a record, or `MissingId` for `resource`.
pub(crate) fn require_id<'a>(
    id: Option<&'a ResourceId>,
    resource: &'static str,
) -> Result<&'a ResourceId, ProviderError> {
    id.ok_or(ProviderError::MissingId { resource })
}
