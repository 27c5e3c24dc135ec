use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A user's personal copy of a book. `voca_list` is an opaque serialized word list owned by the app.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_voca_book")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub vocabook_id: Option<i32>,
    pub color: String,
    pub name: String,
    #[sea_orm(default_value = 0)]
    pub total_word_cnt: i32,
    pub voca_list: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::voca_book::Entity",
        from = "Column::VocabookId",
        to = "super::voca_book::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    VocaBook,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
