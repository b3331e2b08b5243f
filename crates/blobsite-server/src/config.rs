use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ServerResult;

/// Top-level server configuration, loaded once at startup and read-only
/// for the life of the process. Changing it requires a restart.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageConfig,
    pub security: SecurityConfig,
    pub frontend: FrontendConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid default addr"),
            storage: StorageConfig::default(),
            security: SecurityConfig::default(),
            frontend: FrontendConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Where the site content lives.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Container URL (`az://…`, `s3://…`, `file://…`, `memory:///`).
    pub container_url: String,
    /// Index document name served for directory-like paths. Empty string
    /// disables index substitution entirely.
    pub index_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            container_url: "memory:///".to_string(),
            index_name: "index.html".to_string(),
        }
    }
}

/// Who may use the site.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// The single identity allowed through the gate (case-insensitive).
    /// The default empty string authorizes nobody.
    pub authorized_user: String,
    /// Request header carrying the authenticated principal's name, as set
    /// by the auth proxy in front of this server.
    pub identity_header: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            authorized_user: String::new(),
            identity_header: "x-ms-client-principal-name".to_string(),
        }
    }
}

/// How redirect URLs are built.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Host name to use in redirect Locations instead of the request's
    /// `Host` header (for deployments behind a CDN or custom domain).
    pub host_name: Option<String>,
}
