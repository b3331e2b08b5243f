use std::sync::Arc;

use blobsite_store::{ContainerClient, ContainerError, ObjectKey};

use crate::decision::RouteDecision;

/// Routes normalized request paths to blobs in a container.
///
/// The router is a small sequential state machine: a primary fetch, and
/// only when that comes back not-found, a metadata probe for a nested
/// index document. It holds no mutable state; one instance serves all
/// concurrent requests.
pub struct BlobRouter {
    container: Arc<dyn ContainerClient>,
    index_name: String,
}

impl BlobRouter {
    /// Create a router. An empty `index_name` disables index-document
    /// substitution and the nested-index probe.
    pub fn new(container: Arc<dyn ContainerClient>, index_name: impl Into<String>) -> Self {
        Self {
            container,
            index_name: index_name.into(),
        }
    }

    /// The configured index document name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Decide how to answer a request for `path` (output of
    /// [`crate::normalize`]: empty, or starting with `/`).
    pub async fn route(&self, path: &str) -> RouteDecision {
        // An empty path can never be served directly: without the trailing
        // slash, relatively-linked resources under the implicit root would
        // resolve against the wrong base.
        if path.is_empty() {
            return RouteDecision::Redirect(format!("{path}/"));
        }

        // Directory-like paths always look up the index document. `path`
        // itself stays untouched so redirects reproduce what was requested.
        let mut lookup = path.to_string();
        if !self.index_name.is_empty() && lookup.ends_with('/') {
            lookup.push_str(&self.index_name);
        }

        let key = ObjectKey::from_path(&lookup);
        match self.container.fetch(&key).await {
            Ok(object) => RouteDecision::Serve { key, object },
            Err(err) if err.is_not_found() => self.probe_nested_index(path, &key).await,
            Err(err) => server_error(err),
        }
    }

    /// The primary fetch missed; check whether `path` names what is
    /// logically a subdirectory (its index document exists) and if so
    /// redirect to the directory form, preserving relative links.
    async fn probe_nested_index(&self, path: &str, key: &ObjectKey) -> RouteDecision {
        // No probe when there is no index document to look for, when the
        // index itself was the lookup (directory-like path), or when the
        // request already names the index; redirecting there would loop.
        if self.index_name.is_empty()
            || path.ends_with('/')
            || last_segment(path) == self.index_name
        {
            return RouteDecision::NotFound;
        }

        let probe_key = key.child(&self.index_name);
        tracing::debug!("probing nested index {probe_key}");
        match self.container.probe_exists(&probe_key).await {
            Ok(true) => RouteDecision::Redirect(format!("{path}/")),
            Ok(false) => RouteDecision::NotFound,
            Err(err) if err.is_not_found() => RouteDecision::NotFound,
            Err(err) => server_error(err),
        }
    }
}

impl std::fmt::Debug for BlobRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobRouter")
            .field("index_name", &self.index_name)
            .finish_non_exhaustive()
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn server_error(err: ContainerError) -> RouteDecision {
    RouteDecision::ServerError {
        code: err.code().to_string(),
        message: err.to_string(),
    }
}
