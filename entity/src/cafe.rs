use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cafe")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub iban: String,
    pub bic: String,
    pub account_holder: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::abo::Entity")]
    Abo,
    #[sea_orm(has_many = "super::cafe_abo_model::Entity")]
    CafeAboModel,
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::abo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Abo.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::abo_model::Entity> for Entity {
    fn to() -> RelationDef {
        super::cafe_abo_model::Relation::AboModel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cafe_abo_model::Relation::Cafe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
