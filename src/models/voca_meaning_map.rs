use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "voca_meaning_map")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub voca_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub meaning_id: i32,
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
        belongs_to = "super::voca_meaning::Entity",
        from = "Column::MeaningId",
        to = "super::voca_meaning::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Meaning,
}

impl Related<super::voca::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voca.def()
    }
}

impl Related<super::voca_meaning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meaning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
