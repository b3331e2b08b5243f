//! HTTP surface for Blobsite.
//!
//! Serves a static website out of a blob container through a single
//! wildcard GET route, gated to exactly one authorized identity. The
//! routing decisions themselves live in `blobsite-router`; this crate
//! extracts the caller's identity, maps decisions to responses, and emits
//! one log line per request.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod respond;
pub mod router;
pub mod server;

pub use auth::{HeaderIdentity, IdentityProvider, StaticIdentity};
pub use config::{FrontendConfig, SecurityConfig, ServerConfig, StorageConfig};
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::Server;
