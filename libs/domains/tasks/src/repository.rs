use async_trait::async_trait;
use database::DatabaseResult;

use crate::models::{CreateTask, Task};

/// Repository trait for Task persistence
///
/// Pure CRUD with no business rules. Lookups that match nothing return
/// [`database::DatabaseError::RowNotFound`]; mutations do not report how many
/// rows they touched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task (always incomplete) and return it with its assigned id
    async fn create(&self, input: CreateTask) -> DatabaseResult<Task>;

    async fn get_by_id(&self, id: i32) -> DatabaseResult<Task>;

    /// All tasks ordered by id
    async fn list(&self) -> DatabaseResult<Vec<Task>>;

    /// Set `completed = true`
    async fn complete(&self, id: i32) -> DatabaseResult<()>;

    async fn delete(&self, id: i32) -> DatabaseResult<()>;
}
