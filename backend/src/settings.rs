//! Server configuration loaded via OrthoConfig.
//!
//! Values come from defaults, a config file, `USERS_API_*` environment
//! variables and CLI flags, in increasing precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, PoolConfig};

/// Address used when `bind_addr` is not configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Conventional variable consulted when `database_url` is unset.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Raised when `bind_addr` does not parse as a socket address.
#[derive(Debug, thiserror::Error)]
#[error("invalid bind address `{value}`: {source}")]
pub struct BindAddrError {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

/// Configuration values controlling the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without one, records are kept in
    /// memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to
    /// [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`BindAddrError`] when the value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| BindAddrError {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the configured database URL, or `DATABASE_URL` when unset.
    ///
    /// Blank values count as absent.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Whether to apply embedded migrations before serving. Defaults to on.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Pool configuration for `database_url` using the configured limits.
    pub fn pool_config(&self, database_url: impl Into<String>) -> PoolConfig {
        let timeout = self
            .pool_connection_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE))
            .with_connection_timeout(timeout)
    }
}
