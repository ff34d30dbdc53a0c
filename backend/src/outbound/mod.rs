//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed gateway using Diesel ORM
//! - **memory**: process-local gateway for development and tests
//!
//! Adapters are thin translators between domain types and backend
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
