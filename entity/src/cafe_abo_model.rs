use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cafe_abo_model")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cafe_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub abo_model_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cafe::Entity",
        from = "Column::CafeId",
        to = "super::cafe::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cafe,
    #[sea_orm(
        belongs_to = "super::abo_model::Entity",
        from = "Column::AboModelId",
        to = "super::abo_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AboModel,
}

impl Related<super::cafe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cafe.def()
    }
}

impl Related<super::abo_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
