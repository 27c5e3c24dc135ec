use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "voca_example_map")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub voca_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub example_id: i32,
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
        belongs_to = "super::voca_example::Entity",
        from = "Column::ExampleId",
        to = "super::voca_example::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Example,
}

impl Related<super::voca::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voca.def()
    }
}

impl Related<super::voca_example::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Example.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
