use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voca")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub word: String,
    pub pronunciation: Option<String>,
    pub verb_forms: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::voca_book_map::Entity")]
    VocaBookMap,
    #[sea_orm(has_many = "super::voca_meaning_map::Entity")]
    VocaMeaningMap,
    #[sea_orm(has_many = "super::voca_example_map::Entity")]
    VocaExampleMap,
}

impl Related<super::voca_book::Entity> for Entity {
    fn to() -> RelationDef {
        super::voca_book_map::Relation::VocaBook.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::voca_book_map::Relation::Voca.def().rev())
    }
}

impl Related<super::voca_meaning::Entity> for Entity {
    fn to() -> RelationDef {
        super::voca_meaning_map::Relation::Meaning.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::voca_meaning_map::Relation::Voca.def().rev())
    }
}

impl Related<super::voca_example::Entity> for Entity {
    fn to() -> RelationDef {
        super::voca_example_map::Relation::Example.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::voca_example_map::Relation::Voca.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
