//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] assembles the interface description from the metadata declared
//! on the handlers in [`crate::inbound::http::users`] and the schema wrappers
//! in [`crate::inbound::http::schemas`]. Nothing is derived from runtime
//! behaviour, so handler changes must be mirrored in their attributes.
//!
//! The document is served at `/api-docs/openapi.json` and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "API documentation for the users service"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
    ),
    components(schemas(UserSchema, CreateUserRequest, ErrorBody)),
    tags(
        (name = "users", description = "Operations related to users")
    )
)]
pub struct ApiDoc;
