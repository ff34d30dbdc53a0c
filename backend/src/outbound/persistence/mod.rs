//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! [`DieselUserGateway`] implements the domain `UserGateway` port on top of a
//! bounded `bb8` pool of `diesel-async` connections. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module; only domain types cross the boundary.
//!
//! ```ignore
//! use users_api::outbound::persistence::{DbPool, DieselUserGateway, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let gateway = DieselUserGateway::new(pool);
//! ```

mod diesel_user_gateway;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_gateway::DieselUserGateway;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
