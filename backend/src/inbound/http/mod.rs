//! HTTP inbound adapter exposing REST endpoints.

pub mod docs;
pub mod error;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiError;

/// Register the users API and the OpenAPI document route.
///
/// Callers provide `web::Data<state::HttpState>` and
/// `web::Data<docs::ApiDocument>` as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use users_api::inbound::http::{configure, docs::ApiDocument, state::HttpState};
/// use users_api::outbound::memory::InMemoryUserGateway;
///
/// let state = HttpState::new(Arc::new(InMemoryUserGateway::default()));
/// let document = ApiDocument::build().expect("document serialises");
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(document))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(users::json_config())
            .service(users::create_user)
            .service(users::list_users),
    )
    .service(docs::openapi_json);
}
