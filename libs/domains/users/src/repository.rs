use async_trait::async_trait;
use database::DatabaseResult;

use crate::models::{CreateUser, User};

/// Persistence for users
///
/// Pure CRUD with no business rules. A lookup that matches nothing returns
/// [`database::DatabaseError::RowNotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned id
    async fn create(&self, input: CreateUser) -> DatabaseResult<User>;

    async fn get_by_id(&self, id: i32) -> DatabaseResult<User>;
}
