use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "abo_model")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub special_drinks: bool,
    pub price_per_week: i32,
    pub drink_allowance: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::abo::Entity")]
    Abo,
    #[sea_orm(has_many = "super::cafe_abo_model::Entity")]
    CafeAboModel,
}

impl Related<super::abo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Abo.def()
    }
}

impl Related<super::cafe::Entity> for Entity {
    fn to() -> RelationDef {
        super::cafe_abo_model::Relation::Cafe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cafe_abo_model::Relation::AboModel.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
