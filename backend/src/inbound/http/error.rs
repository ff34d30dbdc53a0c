//! HTTP error envelope for the users endpoints.
//!
//! Every failure renders as `{"error": "<fixed message>"}`. The underlying
//! cause is logged by the handler and never reaches the client.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Message returned when creating a user fails for any reason.
pub const CREATE_FAILED_MESSAGE: &str = "Error creating user";
/// Message returned when listing users fails for any reason.
pub const LIST_FAILED_MESSAGE: &str = "Error fetching users";
/// Message returned when the request body is not valid JSON.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ErrorBody {
    /// Error message
    #[schema(example = "Error creating user")]
    pub error: String,
}

/// Error returned by HTTP handlers.
///
/// # Examples
/// ```
/// use actix_web::ResponseError;
/// use users_api::inbound::http::error::ApiError;
///
/// let err = ApiError::list_failed();
/// assert_eq!(err.status_code().as_u16(), 500);
/// assert_eq!(err.message(), "Error fetching users");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    /// Failure of `POST /api/users`.
    pub const fn create_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: CREATE_FAILED_MESSAGE,
        }
    }

    /// Failure of `GET /api/users`.
    pub const fn list_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: LIST_FAILED_MESSAGE,
        }
    }

    /// Request body could not be parsed as JSON.
    pub const fn invalid_body() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_BODY_MESSAGE,
        }
    }

    /// Fixed message rendered to clients.
    pub fn message(&self) -> &'static str {
        self.message
    }

    fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message.to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(self.body())
    }
}
