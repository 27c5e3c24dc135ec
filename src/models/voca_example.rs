use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Example sentence (`exam_en`) and its translation (`exam_ko`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voca_example")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub exam_en: Option<String>,
    pub exam_ko: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::voca_example_map::Entity")]
    VocaExampleMap,
}

impl Related<super::voca::Entity> for Entity {
    fn to() -> RelationDef {
        super::voca_example_map::Relation::Voca.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::voca_example_map::Relation::Example.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
