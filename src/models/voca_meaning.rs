use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voca_meaning")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meaning: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::voca_meaning_map::Entity")]
    VocaMeaningMap,
}

impl Related<super::voca::Entity> for Entity {
    fn to() -> RelationDef {
        super::voca_meaning_map::Relation::Voca.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::voca_meaning_map::Relation::Meaning.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
