//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on the [`UserGateway`] port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserGateway;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_api::inbound::http::state::HttpState;
/// use users_api::outbound::memory::InMemoryUserGateway;
///
/// let state = HttpState::new(Arc::new(InMemoryUserGateway::default()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Storage port backing the `/api/users` handlers.
    pub users: Arc<dyn UserGateway>,
}

impl HttpState {
    /// Construct state around a gateway implementation.
    pub fn new(users: Arc<dyn UserGateway>) -> Self {
        Self { users }
    }
}
