use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voca_book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub book_nm: String,
    pub language: String,
    pub source: String,
    pub category: Option<String>,
    pub username: Option<String>,
    /// Written by the importer only; later word edits do not touch it.
    pub word_count: Option<i32>,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::voca_book_map::Entity")]
    VocaBookMap,
    #[sea_orm(has_many = "super::bookstore::Entity")]
    Bookstore,
}

impl Related<super::voca::Entity> for Entity {
    fn to() -> RelationDef {
        super::voca_book_map::Relation::Voca.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::voca_book_map::Relation::VocaBook.def().rev())
    }
}

impl Related<super::bookstore::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookstore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
