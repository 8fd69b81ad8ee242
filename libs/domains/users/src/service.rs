use async_trait::async_trait;
use database::DatabaseError;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// User business operations
///
/// Other domains depend on this trait rather than on [`UserService`] so they
/// can be handed any implementation (or a mock).
#[async_trait]
pub trait UserOperations: Send + Sync {
    async fn create_user(&self, input: CreateUser) -> UserResult<User>;

    /// Fails with `Validation` for `id <= 0` and `NotFound` for an unknown id
    async fn get_user(&self, id: i32) -> UserResult<User>;
}

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserOperations for UserService<R> {
    #[instrument(skip(self, input))]
    async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        Ok(self.repository.create(input).await?)
    }

    #[instrument(skip(self), fields(user_id = id))]
    async fn get_user(&self, id: i32) -> UserResult<User> {
        if id <= 0 {
            return Err(UserError::Validation("invalid id".to_string()));
        }

        match self.repository.get_by_id(id).await {
            Ok(user) => Ok(user),
            Err(DatabaseError::RowNotFound) => Err(UserError::NotFound("user")),
            Err(e) => Err(UserError::Dependency(e)),
        }
    }
}
