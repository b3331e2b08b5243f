use async_trait::async_trait;

use crate::error::ContainerResult;
use crate::key::ObjectKey;
use crate::object::FetchedObject;

/// Read-only client for a blob container.
///
/// All implementations must satisfy these invariants:
/// - `fetch` of an absent key returns [`ContainerError::NotFound`],
///   never a generic backend error.
/// - `probe_exists` is metadata-only: no blob content is transferred.
///   An absent key is `Ok(false)`; `Err` is reserved for real failures.
/// - Calls are independent; the client holds no per-request state, so a
///   single instance is shared across concurrent requests.
/// - Cancellation is cooperative: dropping the returned future aborts the
///   underlying backend call.
///
/// [`ContainerError::NotFound`]: crate::error::ContainerError::NotFound
#[async_trait]
pub trait ContainerClient: Send + Sync {
    /// Fetch a blob's content and metadata by key.
    async fn fetch(&self, key: &ObjectKey) -> ContainerResult<FetchedObject>;

    /// Check whether a blob exists, without transferring its content.
    async fn probe_exists(&self, key: &ObjectKey) -> ContainerResult<bool>;
}
