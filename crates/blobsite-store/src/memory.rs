use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;
use sha2::{Digest, Sha256};

use crate::error::{ContainerError, ContainerResult};
use crate::key::ObjectKey;
use crate::object::FetchedObject;
use crate::traits::ContainerClient;

#[derive(Clone)]
struct StoredBlob {
    data: Bytes,
    content_type: String,
    etag: String,
}

/// In-memory, HashMap-based container.
///
/// Intended for tests and embedding. Blobs live behind a `RwLock`; fetch and
/// probe calls are counted so tests can assert that the router performed
/// exactly the store traffic it is specified to (e.g. no content transfer
/// for the nested-index probe, zero calls for unauthorized requests).
pub struct MemoryContainer {
    blobs: RwLock<HashMap<String, StoredBlob>>,
    fetches: AtomicUsize,
    probes: AtomicUsize,
    failure: RwLock<Option<(String, String)>>,
}

impl MemoryContainer {
    /// Create a new empty container.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
            fetches: AtomicUsize::new(0),
            probes: AtomicUsize::new(0),
            failure: RwLock::new(None),
        }
    }

    /// Insert a blob. The entity tag is derived from the content hash, so
    /// identical content always carries the same tag.
    pub fn put(&self, key: &str, data: impl Into<Bytes>, content_type: &str) {
        let data = data.into();
        let etag = content_etag(&data);
        self.blobs.write().expect("lock poisoned").insert(
            key.to_string(),
            StoredBlob {
                data,
                content_type: content_type.to_string(),
                etag,
            },
        );
    }

    /// Make every subsequent call fail with a backend error. Used to test
    /// the non-not-found failure path.
    pub fn inject_failure(&self, code: &str, message: &str) {
        *self.failure.write().expect("lock poisoned") = Some((code.to_string(), message.to_string()));
    }

    /// Clear an injected failure.
    pub fn clear_failure(&self) {
        *self.failure.write().expect("lock poisoned") = None;
    }

    /// Number of `fetch` calls made against this container.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of `probe_exists` calls made against this container.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    fn check_failure(&self) -> ContainerResult<()> {
        if let Some((code, message)) = self.failure.read().expect("lock poisoned").clone() {
            return Err(ContainerError::Backend { code, message });
        }
        Ok(())
    }
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerClient for MemoryContainer {
    async fn fetch(&self, key: &ObjectKey) -> ContainerResult<FetchedObject> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let blobs = self.blobs.read().expect("lock poisoned");
        match blobs.get(key.as_str()) {
            Some(blob) => Ok(FetchedObject::from_bytes(
                blob.data.clone(),
                blob.content_type.clone(),
                blob.etag.clone(),
            )),
            None => Err(ContainerError::NotFound(key.clone())),
        }
    }

    async fn probe_exists(&self, key: &ObjectKey) -> ContainerResult<bool> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let blobs = self.blobs.read().expect("lock poisoned");
        Ok(blobs.contains_key(key.as_str()))
    }
}

impl std::fmt::Debug for MemoryContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryContainer")
            .field("blob_count", &self.len())
            .finish()
    }
}

/// Quoted hex entity tag from a SHA-256 of the content.
fn content_etag(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    format!("\"{:x}\"", digest)
}
