use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{CreateTask, Task};
use crate::repository::TaskRepository;

/// Process-local task store
///
/// Ids start at 1 and are never reused. `complete` and `delete` on a missing
/// id are no-ops, like their SQL counterparts.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    tasks: BTreeMap<i32, Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> DatabaseResult<Task> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| DatabaseError::Generic("id sequence exhausted".to_string()))?;

        let task = Task {
            id: inner.last_id,
            description: input.description,
            completed: false,
            owner_id: input.owner_id,
        };
        inner.tasks.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<Task> {
        self.inner
            .read()
            .await
            .tasks
            .get(&id)
            .cloned()
            .ok_or(DatabaseError::RowNotFound)
    }

    async fn list(&self) -> DatabaseResult<Vec<Task>> {
        Ok(self.inner.read().await.tasks.values().cloned().collect())
    }

    async fn complete(&self, id: i32) -> DatabaseResult<()> {
        if let Some(task) = self.inner.write().await.tasks.get_mut(&id) {
            task.completed = true;
            tracing::info!(task_id = id, "Completed task");
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DatabaseResult<()> {
        if self.inner.write().await.tasks.remove(&id).is_some() {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(description: &str) -> CreateTask {
        CreateTask {
            description: description.into(),
            owner_id: 1,
        }
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = InMemoryTaskRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryTaskRepository::new();
        for d in ["b", "a", "c"] {
            repo.create(input(d)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_complete_then_delete() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(input("Buy groceries")).await.unwrap();
        assert!(!task.completed);

        repo.complete(task.id).await.unwrap();
        assert!(repo.get_by_id(task.id).await.unwrap().completed);

        repo.delete(task.id).await.unwrap();
        assert!(matches!(repo.get_by_id(task.id).await, Err(DatabaseError::RowNotFound)));
    }

    #[tokio::test]
    async fn test_mutations_on_missing_id_are_noops() {
        let repo = InMemoryTaskRepository::new();
        assert!(repo.complete(5).await.is_ok());
        assert!(repo.delete(5).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_fails_when_ids_are_exhausted() {
        let repo = InMemoryTaskRepository {
            inner: RwLock::new(Inner {
                last_id: i32::MAX,
                tasks: BTreeMap::new(),
            }),
        };

        let err = repo.create(input("overflow")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Generic(ref msg) if msg == "id sequence exhausted"));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
