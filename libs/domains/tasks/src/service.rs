use async_trait::async_trait;
use database::DatabaseError;
use domain_users::UserOperations;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task};
use crate::repository::TaskRepository;

/// Task business operations
#[async_trait]
pub trait TaskOperations: Send + Sync {
    /// Validates the description and that the owner exists, then stores the task
    async fn create_task(&self, input: CreateTask) -> TaskResult<Task>;

    async fn get_task(&self, id: i32) -> TaskResult<Task>;

    async fn view_tasks(&self) -> TaskResult<Vec<Task>>;

    /// Marks an existing task as completed
    async fn update_task(&self, id: i32) -> TaskResult<()>;

    async fn delete_task(&self, id: i32) -> TaskResult<()>;
}

/// Service layer for Task business logic
///
/// Owner existence is checked through the injected [`UserOperations`].
pub struct TaskService<R: TaskRepository, U: UserOperations> {
    repository: Arc<R>,
    users: Arc<U>,
}

impl<R: TaskRepository, U: UserOperations> TaskService<R, U> {
    pub fn new(repository: R, users: U) -> Self {
        Self {
            repository: Arc::new(repository),
            users: Arc::new(users),
        }
    }
}

impl<R: TaskRepository, U: UserOperations> Clone for TaskService<R, U> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            users: Arc::clone(&self.users),
        }
    }
}

#[async_trait]
impl<R: TaskRepository, U: UserOperations> TaskOperations for TaskService<R, U> {
    #[instrument(skip(self, input), fields(owner_id = input.owner_id))]
    async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input.validate()?;

        // Any failure to resolve the owner, including a store outage, reads as unknown owner
        if let Err(e) = self.users.get_user(input.owner_id).await {
            tracing::debug!(error = %e, "Owner lookup failed");
            return Err(TaskError::Validation("user ID not found".to_string()));
        }

        Ok(self.repository.create(input).await?)
    }

    #[instrument(skip(self), fields(task_id = id))]
    async fn get_task(&self, id: i32) -> TaskResult<Task> {
        if id <= 0 {
            return Err(TaskError::Validation("invalid id".to_string()));
        }

        match self.repository.get_by_id(id).await {
            Ok(task) => Ok(task),
            Err(DatabaseError::RowNotFound) => Err(TaskError::NotFound("task")),
            Err(e) => Err(TaskError::Dependency(e)),
        }
    }

    async fn view_tasks(&self) -> TaskResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    #[instrument(skip(self), fields(task_id = id))]
    async fn update_task(&self, id: i32) -> TaskResult<()> {
        self.get_task(id).await?;

        Ok(self.repository.complete(id).await?)
    }

    #[instrument(skip(self), fields(task_id = id))]
    async fn delete_task(&self, id: i32) -> TaskResult<()> {
        self.get_task(id).await?;

        Ok(self.repository.delete(id).await?)
    }
}
