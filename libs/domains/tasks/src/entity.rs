use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for Tasks table
///
/// `owner_id` is indexed but has no foreign key; ownership is checked by the
/// service when a task is created.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub completed: bool,
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            completed: model.completed,
            owner_id: model.owner_id,
        }
    }
}

// New tasks always start incomplete
impl From<crate::models::CreateTask> for ActiveModel {
    fn from(input: crate::models::CreateTask) -> Self {
        ActiveModel {
            id: NotSet,
            description: Set(input.description),
            completed: Set(false),
            owner_id: Set(input.owner_id),
        }
    }
}
