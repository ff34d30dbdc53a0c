//! Port abstraction for user storage and its collapsed error type.
//!
//! Inbound adapters call [`UserGateway`] directly: each HTTP request maps to
//! exactly one gateway call. Adapters translate their backend failures into
//! [`StorageError`] so handlers can log the kind while responding with a
//! fixed message.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user gateway adapters.
    pub enum StorageError {
        /// Backend could not be reached, or a pooled connection was lost.
        Connection { message: String } => "user storage connection failed: {message}",
        /// A constraint such as e-mail uniqueness rejected the write.
        Constraint { message: String } => "user storage constraint violated: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user storage query failed: {message}",
    }
}

impl StorageError {
    /// Stable label for structured logs.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::ports::StorageError;
    ///
    /// assert_eq!(StorageError::connection("refused").kind(), "connection");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::Constraint { .. } => "constraint",
            Self::Query { .. } => "query",
        }
    }
}

/// Persistence façade for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Insert a new record and return it with its generated identifier.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError>;

    /// Return every stored user. Ordering is adapter-defined.
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for storage error labels and messages.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StorageError::connection("refused"), "connection", "user storage connection failed: refused")]
    #[case(StorageError::constraint("duplicate email"), "constraint", "user storage constraint violated: duplicate email")]
    #[case(StorageError::query("syntax"), "query", "user storage query failed: syntax")]
    fn storage_error_reports_kind_and_message(
        #[case] error: StorageError,
        #[case] kind: &str,
        #[case] message: &str,
    ) {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.to_string(), message);
    }
}
