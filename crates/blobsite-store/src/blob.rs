use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::path::Path;
use object_store::{Attribute, ObjectStore, ObjectStoreScheme};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ContainerError, ContainerResult};
use crate::key::ObjectKey;
use crate::object::FetchedObject;
use crate::traits::ContainerClient;

/// Connection settings for a real blob container.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Container URL, e.g. `az://site-content`, `s3://my-bucket/site`,
    /// `file:///var/www/site`, or `memory:///`.
    pub url: String,
}

/// Container client backed by the `object_store` crate.
///
/// Credentials are resolved from the environment by the backend builders
/// (`AZURE_STORAGE_*`, `AWS_*`). The URL's path component becomes a key
/// prefix inside the bucket or container.
pub struct BlobContainer {
    store: Arc<dyn ObjectStore>,
    prefix: Path,
    url: String,
}

impl BlobContainer {
    pub fn new(config: &ContainerConfig) -> ContainerResult<Self> {
        Self::from_url(&config.url)
    }

    /// Build a client from a container URL.
    pub fn from_url(url_str: &str) -> ContainerResult<Self> {
        let url = url_str
            .parse::<Url>()
            .map_err(|e| ContainerError::InvalidUrl(format!("{url_str}: {e}")))?;
        let (scheme, prefix) = ObjectStoreScheme::parse(&url)
            .map_err(|e| ContainerError::InvalidUrl(format!("{url_str}: {e}")))?;

        // S3 and Azure need their env-based credential builders; everything
        // else parses directly.
        let store: Box<dyn ObjectStore> = match scheme {
            ObjectStoreScheme::AmazonS3 => Box::new(
                AmazonS3Builder::from_env()
                    .with_url(url_str)
                    .build()
                    .map_err(|e| ContainerError::InvalidUrl(e.to_string()))?,
            ),
            ObjectStoreScheme::MicrosoftAzure => Box::new(
                MicrosoftAzureBuilder::from_env()
                    .with_url(url_str)
                    .build()
                    .map_err(|e| ContainerError::InvalidUrl(e.to_string()))?,
            ),
            _ => {
                let (store, _) = object_store::parse_url(&url)
                    .map_err(|e| ContainerError::InvalidUrl(e.to_string()))?;
                store
            }
        };

        tracing::info!("container client ready for {url_str}");
        Ok(Self {
            store: Arc::from(store),
            prefix,
            url: url_str.to_string(),
        })
    }

    /// The configured container URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn object_path(&self, key: &ObjectKey) -> Path {
        if self.prefix.as_ref().is_empty() {
            Path::from(key.as_str())
        } else {
            Path::from(format!("{}/{}", self.prefix.as_ref(), key.as_str()))
        }
    }
}

#[async_trait]
impl ContainerClient for BlobContainer {
    async fn fetch(&self, key: &ObjectKey) -> ContainerResult<FetchedObject> {
        let path = self.object_path(key);
        let result = self
            .store
            .get(&path)
            .await
            .map_err(|e| map_store_error(key, e))?;

        let content_type = result
            .attributes
            .get(&Attribute::ContentType)
            .map(|v| v.to_string())
            .unwrap_or_else(|| guess_content_type(key));
        let etag = result.meta.e_tag.clone().unwrap_or_default();
        let size = result.meta.size;

        let fetch_key = key.clone();
        let content = result
            .into_stream()
            .map(move |chunk| chunk.map_err(|e| map_store_error(&fetch_key, e)))
            .boxed();

        Ok(FetchedObject {
            content,
            content_type,
            etag,
            size,
        })
    }

    async fn probe_exists(&self, key: &ObjectKey) -> ContainerResult<bool> {
        let path = self.object_path(key);
        match self.store.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(map_store_error(key, e)),
        }
    }
}

impl std::fmt::Debug for BlobContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobContainer")
            .field("url", &self.url)
            .field("prefix", &self.prefix.as_ref())
            .finish()
    }
}

/// Content type by file extension when the backend recorded none
/// (local filesystem stores in particular).
fn guess_content_type(key: &ObjectKey) -> String {
    mime_guess::from_path(key.as_str())
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

fn map_store_error(key: &ObjectKey, err: object_store::Error) -> ContainerError {
    match err {
        object_store::Error::NotFound { .. } => ContainerError::NotFound(key.clone()),
        other => ContainerError::Backend {
            code: store_error_code(&other).to_string(),
            message: other.to_string(),
        },
    }
}

fn store_error_code(err: &object_store::Error) -> &'static str {
    match err {
        object_store::Error::NotFound { .. } => "NotFound",
        object_store::Error::InvalidPath { .. } => "InvalidPath",
        object_store::Error::PermissionDenied { .. } => "PermissionDenied",
        object_store::Error::Unauthenticated { .. } => "Unauthenticated",
        object_store::Error::NotSupported { .. } => "NotSupported",
        object_store::Error::Precondition { .. } => "Precondition",
        object_store::Error::NotModified { .. } => "NotModified",
        _ => "Generic",
    }
}
