//! Users API entry point: loads settings, selects the storage backend and
//! serves the REST endpoints with their OpenAPI document.

mod server;

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::domain::ports::UserGateway;
use users_api::inbound::http::docs::ApiDocument;
use users_api::outbound::memory::InMemoryUserGateway;
use users_api::outbound::persistence::{DbPool, DieselUserGateway, run_migrations};
use users_api::settings::ServerSettings;

/// Select the storage backend: PostgreSQL when a database URL is configured,
/// otherwise the in-memory store.
///
/// The returned gateway owns the only pool handle, so the pool lives exactly
/// as long as the server's shared state.
async fn build_gateway(settings: &ServerSettings) -> std::io::Result<Arc<dyn UserGateway>> {
    let Some(database_url) = settings.database_url() else {
        warn!(backend = "memory", "no database URL configured; records will not persist");
        return Ok(Arc::new(InMemoryUserGateway::default()));
    };

    if settings.run_migrations() {
        run_migrations(&database_url)
            .await
            .map_err(|e| std::io::Error::other(format!("database migration failed: {e}")))?;
    }

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
    info!(backend = "postgres", "user storage ready");
    Ok(Arc::new(DieselUserGateway::new(pool)))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let document = ApiDocument::build()
        .map_err(|e| std::io::Error::other(format!("failed to build OpenAPI document: {e}")))?;

    let users = build_gateway(&settings).await?;
    let server = create_server(ServerConfig::new(bind_addr, users, document))?;
    let result = server.await;
    info!("server stopped");
    result
}
