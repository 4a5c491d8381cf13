use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub hashed_password: String,
    pub last_paid: Date,
    pub activated: bool,
    /// 0 = cash, 1 = PayPal
    pub payment_method: i32,
    pub drinks_drunk: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::abo::Entity")]
    Abo,
}

impl Related<super::abo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Abo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
