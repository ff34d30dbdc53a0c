//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use users_api::domain::ports::UserGateway;
use users_api::inbound::http::docs::ApiDocument;

/// Everything the server needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UserGateway>,
    pub(crate) document: ApiDocument,
}

impl ServerConfig {
    /// Collect what [`create_server`](super::create_server) needs to listen.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, users: Arc<dyn UserGateway>, document: ApiDocument) -> Self {
        Self {
            bind_addr,
            users,
            document,
        }
    }
}
