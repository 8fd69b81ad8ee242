use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// Process-local user store
///
/// Ids start at 1 and are never reused, matching a `serial` column.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    users: BTreeMap<i32, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> DatabaseResult<User> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| DatabaseError::Generic("id sequence exhausted".to_string()))?;

        let user = User {
            id: inner.last_id,
            name: input.name,
        };
        inner.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<User> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(DatabaseError::RowNotFound)
    }
}
