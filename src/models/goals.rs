use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub goal_type: String,
    pub title: String,
    pub reward_value: i32,
    pub reward_type: String,
    pub reward: i32,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_goals::Entity")]
    UserGoals,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_goals::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_goals::Relation::Goal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
