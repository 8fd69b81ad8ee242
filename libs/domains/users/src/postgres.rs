use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::{
    entity,
    models::{CreateUser, User},
    repository::UserRepository,
};

pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> DatabaseResult<User> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(DatabaseError::RowNotFound)
    }
}
