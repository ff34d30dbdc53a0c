//! Users API handlers.
//!
//! ```text
//! POST /api/users {"name":"John Doe","email":"john.doe@example.com"}
//! GET /api/users
//! ```
//!
//! Each accepted request issues exactly one gateway call. Failures collapse
//! into a fixed error envelope; the storage error kind is logged instead.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::domain::{NewUser, TraceId, UserValidationError};
use crate::domain::ports::StorageError;
use crate::inbound::http::error::{ApiError, ErrorBody};
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users`.
///
/// Both fields are optional at the wire level; absence is reported as a
/// creation failure rather than a client error.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// The name of the user
    #[schema(value_type = String, example = "John Doe")]
    pub name: Option<String>,
    /// The email of the user
    #[schema(value_type = String, example = "john.doe@example.com")]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Interpret a parsed JSON document as a creation request.
    ///
    /// Only objects qualify. Arrays, scalars and mistyped fields are
    /// rejected even though the body itself was valid JSON.
    ///
    /// # Errors
    /// Returns the deserialisation error describing the mismatch.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use users_api::inbound::http::users::CreateUserRequest;
    ///
    /// assert!(CreateUserRequest::from_json(json!({ "name": "Ada" })).is_ok());
    /// assert!(CreateUserRequest::from_json(json!(["Ada", "ada@example.com"])).is_err());
    /// ```
    pub fn from_json(body: Value) -> Result<Self, serde_json::Error> {
        if !body.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "request body must be a JSON object",
            ));
        }
        serde_json::from_value(body)
    }
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.name, value.email)
    }
}

/// JSON extractor configuration for the users scope.
///
/// The content type is not enforced. Bodies that are not valid JSON render
/// the standard error envelope with status 400; well-formed JSON of the
/// wrong shape is left to the handler.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req: &HttpRequest| {
            warn!(
                error = %err,
                trace_id = %TraceId::current_label(),
                "rejected malformed user request body"
            );
            ApiError::invalid_body().into()
        })
}

fn log_storage_failure(operation: &'static str, err: &StorageError) {
    error!(
        operation,
        kind = err.kind(),
        error = %err,
        trace_id = %TraceId::current_label(),
        "user gateway call failed"
    );
}

/// Create a new user.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::users::create_user;
///
/// let app = App::new().service(web::scope("/api").service(create_user));
/// ```
#[utoipa::path(
    post,
    path = "/api/users",
    description = "Create a new user",
    request_body(
        content = CreateUserRequest,
        description = "User object that needs to be added to the database",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "User created successfully", body = UserSchema),
        (
            status = 500,
            description = "Error creating user",
            body = ErrorBody,
            example = json!({ "error": "Error creating user" })
        )
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = CreateUserRequest::from_json(payload.into_inner()).map_err(|err| {
        warn!(
            error = %err,
            trace_id = %TraceId::current_label(),
            "user request body has the wrong shape"
        );
        ApiError::create_failed()
    })?;
    let new_user = NewUser::try_from(request).map_err(|err| {
        warn!(
            field = err.field(),
            error = %err,
            trace_id = %TraceId::current_label(),
            "user creation rejected before reaching the gateway"
        );
        ApiError::create_failed()
    })?;

    let user = state.users.create_user(new_user).await.map_err(|err| {
        log_storage_failure("create_user", &err);
        ApiError::create_failed()
    })?;

    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(user))
}

/// Retrieve a list of users.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    description = "Retrieve a list of users",
    responses(
        (status = 200, description = "A list of users", body = [UserSchema]),
        (
            status = 500,
            description = "Error fetching users",
            body = ErrorBody,
            example = json!({ "error": "Error fetching users" })
        )
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> Result<HttpResponse, ApiError> {
    let users = state.users.list_users().await.map_err(|err| {
        log_storage_failure("list_users", &err);
        ApiError::list_failed()
    })?;
    Ok(HttpResponse::Ok().json(users))
}
