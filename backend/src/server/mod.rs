//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use users_api::Trace;
use users_api::inbound::http::configure;
use users_api::inbound::http::docs::ApiDocument;
#[cfg(debug_assertions)]
use users_api::inbound::http::docs::OPENAPI_JSON_PATH;
use users_api::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
    document: web::Data<ApiDocument>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(document)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").config(utoipa_swagger_ui::Config::from(OPENAPI_JSON_PATH)),
    );

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        users,
        document,
    } = config;
    let http_state = web::Data::new(HttpState::new(users));
    let document = web::Data::new(document);

    let server = HttpServer::new(move || build_app(http_state.clone(), document.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "users API listening");
    Ok(server)
}
