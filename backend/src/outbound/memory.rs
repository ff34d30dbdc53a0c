//! Process-local `UserGateway` used when no database is configured.
//!
//! Records live for the lifetime of the process. Identifiers start at 1 and
//! increase monotonically; e-mail uniqueness is checked the same way the
//! PostgreSQL schema enforces it.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{StorageError, UserGateway};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct Store {
    users: Vec<User>,
    last_id: i32,
}

/// In-memory implementation of the [`UserGateway`] port.
#[derive(Debug, Default)]
pub struct InMemoryUserGateway {
    store: Mutex<Store>,
}

impl InMemoryUserGateway {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Store>, StorageError> {
        self.store
            .lock()
            .map_err(|_| StorageError::connection("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StorageError> {
        let mut store = self.lock()?;
        if store
            .users
            .iter()
            .any(|user| user.email() == new_user.email())
        {
            return Err(StorageError::constraint("email already registered"));
        }
        let next_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| StorageError::query("user id sequence exhausted"))?;
        store.last_id = next_id;
        let user = new_user.into_user(UserId::new(next_id));
        store.users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.lock()?.users.clone())
    }
}
