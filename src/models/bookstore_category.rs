use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookstore_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookstore_has_category::Entity")]
    BookstoreHasCategory,
}

impl Related<super::bookstore::Entity> for Entity {
    fn to() -> RelationDef {
        super::bookstore_has_category::Relation::Bookstore.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::bookstore_has_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
