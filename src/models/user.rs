use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// End user of the learning app. The console never authenticates these.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub google_id: String,
    pub name: String,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub code: String,
    #[sea_orm(default_value = 3)]
    pub book_cnt: i32,
    #[sea_orm(default_value = 0)]
    pub gem_cnt: i32,
    #[sea_orm(default_value = 3)]
    pub set_goal_cnt: i32,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    pub created_at: String,
    pub last_logged_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_has_token::Entity")]
    Tokens,
    #[sea_orm(has_many = "super::user_voca_book::Entity")]
    VocaBooks,
    #[sea_orm(has_many = "super::check_in::Entity")]
    CheckIns,
    #[sea_orm(has_many = "super::user_goals::Entity")]
    Goals,
}

impl Related<super::user_has_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tokens.def()
    }
}

impl Related<super::user_voca_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VocaBooks.def()
    }
}

impl Related<super::check_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckIns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
