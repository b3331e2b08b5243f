use std::sync::Arc;

use tokio::net::TcpListener;

use blobsite_store::ContainerClient;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// The Blobsite HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    pub fn new(config: ServerConfig, container: Arc<dyn ContainerClient>) -> Self {
        let state = Arc::new(AppState::new(&config, container));
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.state))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(Arc::clone(&self.state));
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("blobsite server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobsite_store::MemoryContainer;

    #[test]
    fn server_construction() {
        let server = Server::new(ServerConfig::default(), Arc::new(MemoryContainer::new()));
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = Server::new(ServerConfig::default(), Arc::new(MemoryContainer::new()));
        let _router = server.router();
    }
}
