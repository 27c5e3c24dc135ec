use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookstore_has_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bookstore_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bookstore::Entity",
        from = "Column::BookstoreId",
        to = "super::bookstore::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Bookstore,
    #[sea_orm(
        belongs_to = "super::bookstore_category::Entity",
        from = "Column::CategoryId",
        to = "super::bookstore_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::bookstore::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookstore.def()
    }
}

impl Related<super::bookstore_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
