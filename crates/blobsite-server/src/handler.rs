use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Uri};
use axum::response::Response;

use blobsite_router::{authorize, normalize, BlobRouter, RouteDecision};
use blobsite_store::ContainerClient;

use crate::auth::{HeaderIdentity, IdentityProvider};
use crate::config::ServerConfig;
use crate::respond;

/// Shared per-process state: configuration plus the container client, all
/// read-only once built.
pub struct AppState {
    pub router: BlobRouter,
    pub identity: Arc<dyn IdentityProvider>,
    pub authorized_user: String,
    pub host_name: Option<String>,
}

impl AppState {
    pub fn new(config: &ServerConfig, container: Arc<dyn ContainerClient>) -> Self {
        Self {
            router: BlobRouter::new(container, config.storage.index_name.clone()),
            identity: Arc::new(HeaderIdentity::new(config.security.identity_header.clone())),
            authorized_user: config.security.authorized_user.clone(),
            host_name: config.frontend.host_name.clone(),
        }
    }

    /// Swap the identity source. Tests use this with
    /// [`crate::auth::StaticIdentity`].
    pub fn with_identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity = provider;
        self
    }
}

/// `GET /{*path}`: the single route of the whole site.
///
/// Gate first (no container traffic for rejected callers), then normalize,
/// route, log the terminal decision, and map it to a response.
pub async fn serve_blob(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let raw = path.map(|Path(p)| p).unwrap_or_default();
    let request_path = uri.path();

    let identity = state.identity.identify(&headers);
    if !authorize(&identity, &state.authorized_user) {
        tracing::info!("GET {request_path} 401");
        return respond::unauthorized_response();
    }

    let path = normalize(&raw, request_path);
    let base_uri = base_uri(&state, &headers, request_path, &path);
    let decision = state.router.route(&path).await;
    log_decision(&path, &decision);
    respond::decision_response(decision, &base_uri)
}

/// Base URI for redirect Locations: scheme from the forwarding proxy,
/// host from config override or the request, plus any route prefix in
/// front of the normalized path.
fn base_uri(state: &AppState, headers: &HeaderMap, request_path: &str, path: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = match &state.host_name {
        Some(name) => name.as_str(),
        None => headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(""),
    };
    let base_path = if path.is_empty() {
        request_path
    } else {
        request_path.strip_suffix(path).unwrap_or("")
    };
    format!("{scheme}://{host}{base_path}")
}

/// One log line per terminal decision.
fn log_decision(path: &str, decision: &RouteDecision) {
    match decision {
        RouteDecision::Serve { object, .. } => {
            tracing::info!("GET {path} 200 ({}; {})", object.content_type, object.etag);
        }
        RouteDecision::Redirect(target) => {
            tracing::info!("GET {path} 301 ({target})");
        }
        RouteDecision::NotFound => {
            tracing::warn!("GET {path} 404");
        }
        RouteDecision::ServerError { code, message } => {
            tracing::error!("GET {path} 500 ({code} {message})");
        }
    }
}
