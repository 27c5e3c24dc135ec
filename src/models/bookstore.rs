use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `hide` value for a listing shown in the store.
pub const VISIBLE: &str = "N";
/// `hide` value for a listing kept out of the store.
pub const HIDDEN: &str = "Y";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookstore")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Display order in the store front.
    pub downloads: i32,
    pub category: String,
    pub color: Option<String>,
    #[sea_orm(default_value = 10)]
    pub gem: i32,
    pub hide: String,
    pub level: Option<String>,
    pub level_id: i32,
    pub book_id: i32,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl Model {
    pub fn is_visible(&self) -> bool {
        self.hide != HIDDEN
    }
}

pub fn hide_flag(is_visible: bool) -> String {
    if is_visible { VISIBLE } else { HIDDEN }.to_string()
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::level::Entity",
        from = "Column::LevelId",
        to = "super::level::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Level,
    #[sea_orm(
        belongs_to = "super::voca_book::Entity",
        from = "Column::BookId",
        to = "super::voca_book::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    VocaBook,
    #[sea_orm(has_many = "super::bookstore_has_category::Entity")]
    BookstoreHasCategory,
}

impl Related<super::level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::voca_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VocaBook.def()
    }
}

impl Related<super::bookstore_category::Entity> for Entity {
    fn to() -> RelationDef {
        super::bookstore_has_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::bookstore_has_category::Relation::Bookstore.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
