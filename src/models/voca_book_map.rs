use sea_orm::entity::prelude::*;

/// Book membership of a word. Rows go away with either side.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "voca_book_map")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub voca_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::voca::Entity",
        from = "Column::VocaId",
        to = "super::voca::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Voca,
    #[sea_orm(
        belongs_to = "super::voca_book::Entity",
        from = "Column::BookId",
        to = "super::voca_book::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    VocaBook,
}

impl Related<super::voca::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voca.def()
    }
}

impl Related<super::voca_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VocaBook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
