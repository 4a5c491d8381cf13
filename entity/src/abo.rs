use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "abo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub abo_model_id: String,
    /// Unique: a customer holds at most one abo.
    #[sea_orm(unique)]
    pub customer_id: String,
    pub cafe_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::abo_model::Entity",
        from = "Column::AboModelId",
        to = "super::abo_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    AboModel,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::cafe::Entity",
        from = "Column::CafeId",
        to = "super::cafe::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cafe,
}

impl Related<super::abo_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboModel.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::cafe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cafe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
