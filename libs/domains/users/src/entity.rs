use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

// id is left to the serial column
impl From<crate::models::CreateUser> for ActiveModel {
    fn from(input: crate::models::CreateUser) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
        }
    }
}
