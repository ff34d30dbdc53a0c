//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates, so the app wiring and the
//! gateway doubles used by several suites live here.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use users_api::Trace;
use users_api::domain::ports::{StorageError, UserGateway};
use users_api::domain::{NewUser, TRACE_ID_HEADER, User};
use users_api::inbound::http::configure;
use users_api::inbound::http::docs::ApiDocument;
use users_api::inbound::http::state::HttpState;

/// Gateway whose backend is never reachable.
pub struct UnreachableGateway;

#[async_trait]
impl UserGateway for UnreachableGateway {
    async fn create_user(&self, _new_user: NewUser) -> Result<User, StorageError> {
        Err(StorageError::connection("connection refused"))
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        Err(StorageError::connection("connection refused"))
    }
}

/// Status, trace header and raw body of a completed request.
pub struct CapturedResponse {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }
}

/// Initialise the production route table around `gateway`, wrapped in the
/// trace middleware.
pub async fn init_app(
    gateway: Arc<dyn UserGateway>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let document = ApiDocument::build().expect("document serialises");
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(gateway)))
            .app_data(web::Data::new(document))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Send `request` and capture the parts the suites assert on.
pub async fn send<S, B>(app: &S, request: actix_test::TestRequest) -> CapturedResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = actix_test::read_body(response).await.to_vec();
    CapturedResponse {
        status,
        trace_id,
        body,
    }
}
