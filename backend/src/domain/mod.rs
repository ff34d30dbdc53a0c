//! Domain primitives and ports.
//!
//! Purpose: define the user entity, the creation request that feeds the
//! gateway, and the [`ports::UserGateway`] boundary that persistence adapters
//! implement. Types here stay free of HTTP and Diesel concerns.
//!
//! Public surface:
//! - User (alias to `user::User`) — stored user record.
//! - NewUser (alias to `user::NewUser`) — presence-checked creation request.
//! - TraceId (alias to `trace_id::TraceId`) — request correlation identifier.

pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId, UserValidationError};
