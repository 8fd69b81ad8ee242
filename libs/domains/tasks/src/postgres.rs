use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    models::{CreateTask, Task},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> DatabaseResult<Task> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, owner_id = model.owner_id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<Task> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(DatabaseError::RowNotFound)
    }

    async fn list(&self) -> DatabaseResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn complete(&self, id: i32) -> DatabaseResult<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::Completed, Expr::value(true))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        tracing::info!(task_id = id, "Completed task");
        Ok(())
    }

    async fn delete(&self, id: i32) -> DatabaseResult<()> {
        entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(task_id = id, "Deleted task");
        Ok(())
    }
}
