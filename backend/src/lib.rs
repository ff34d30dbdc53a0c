//! Users API library: domain model, storage gateways and HTTP adapter.
//!
//! The binary in `main.rs` wires these pieces into an Actix server; the
//! integration tests under `backend/tests` build the same app in-process.

#![warn(missing_docs)]

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
