use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub level: i32,
    pub level_name: String,
    pub level_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookstore::Entity")]
    Bookstore,
}

impl Related<super::bookstore::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookstore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
