use std::fmt;

use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};

use crate::error::ContainerResult;

/// Streamed blob content.
pub type ContentStream = BoxStream<'static, ContainerResult<Bytes>>;

/// A blob fetched from the container: content plus the metadata needed to
/// serve it over HTTP.
///
/// Owned for the duration of the response write; dropping it releases the
/// underlying backend stream, including on early client disconnect.
pub struct FetchedObject {
    /// Blob content, streamed from the backend.
    pub content: ContentStream,
    /// Content type as recorded by the store.
    pub content_type: String,
    /// Entity tag for this revision of the blob. May be empty if the
    /// backend does not supply one.
    pub etag: String,
    /// Total content length in bytes.
    pub size: u64,
}

impl FetchedObject {
    /// Build an object from in-memory bytes (single-chunk stream).
    pub fn from_bytes(data: Bytes, content_type: impl Into<String>, etag: impl Into<String>) -> Self {
        let size = data.len() as u64;
        Self {
            content: stream::once(async move { Ok(data) }).boxed(),
            content_type: content_type.into(),
            etag: etag.into(),
            size,
        }
    }

    /// Collect the full content into one buffer. Test helper; the server
    /// streams instead of collecting.
    pub async fn into_bytes(self) -> ContainerResult<Bytes> {
        let chunks: Vec<ContainerResult<Bytes>> = self.content.collect().await;
        let mut buf = Vec::new();
        for chunk in chunks {
            buf.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(buf))
    }
}

impl fmt::Debug for FetchedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedObject")
            .field("content_type", &self.content_type)
            .field("etag", &self.etag)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
