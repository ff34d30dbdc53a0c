//! Serves the OpenAPI document built once at startup.

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use utoipa::OpenApi;

use crate::doc::ApiDoc;

/// URL of the published OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Serialised OpenAPI document shared read-only across workers.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    json: Arc<str>,
}

impl ApiDocument {
    /// Serialise [`ApiDoc`] once.
    ///
    /// # Errors
    /// Returns the serialisation error when the document cannot be encoded.
    ///
    /// # Examples
    /// ```
    /// use users_api::inbound::http::docs::ApiDocument;
    ///
    /// let document = ApiDocument::build().expect("document serialises");
    /// assert!(document.as_str().contains("/api/users"));
    /// ```
    pub fn build() -> Result<Self, serde_json::Error> {
        let json = ApiDoc::openapi().to_pretty_json()?;
        Ok(Self { json: json.into() })
    }

    /// Borrow the JSON text.
    pub fn as_str(&self) -> &str {
        &self.json
    }
}

/// Return the OpenAPI document verbatim.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json(document: web::Data<ApiDocument>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(document.as_str().to_owned())
}
