//! PostgreSQL-backed `UserGateway` implementation using Diesel ORM.
//!
//! Each operation checks out one pooled connection and issues a single
//! statement, so a failed create never leaves a partial row behind.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{StorageError, UserGateway};
use crate::domain::{NewUser, User};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserGateway`] port.
#[derive(Clone)]
pub struct DieselUserGateway {
    pool: DbPool,
}

impl DieselUserGateway {
    /// Wrap `pool`; connections are checked out per call.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StorageError {
    debug!(%error, "connection checkout failed");
    StorageError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> StorageError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StorageError::constraint(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
            StorageError::constraint(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StorageError::connection("database connection closed")
        }
        DieselError::NotFound => StorageError::query("record not found"),
        DieselError::QueryBuilderError(_) => StorageError::query("database query error"),
        _ => StorageError::query("database error"),
    }
}

#[async_trait]
impl UserGateway for DieselUserGateway {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            name: new_user.name(),
            email: new_user.email(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(User::from)
            .map_err(map_diesel_error)
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order_by(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
