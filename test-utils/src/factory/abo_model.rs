//! Abo model factory for creating test subscription plans.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test abo models with customizable fields.
pub struct AboModelFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    special_drinks: bool,
    price_per_week: i32,
    drink_allowance: i32,
}

impl<'a> AboModelFactory<'a> {
    /// Creates a new AboModelFactory with default values.
    ///
    /// Defaults:
    /// - id: `"abo_model_{n}"`
    /// - special_drinks: `false`
    /// - price_per_week: `10`
    /// - drink_allowance: `7`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: format!("abo_model_{}", next_id()),
            special_drinks: false,
            price_per_week: 10,
            drink_allowance: 7,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn special_drinks(mut self, special_drinks: bool) -> Self {
        self.special_drinks = special_drinks;
        self
    }

    pub fn price_per_week(mut self, price_per_week: i32) -> Self {
        self.price_per_week = price_per_week;
        self
    }

    pub fn drink_allowance(mut self, drink_allowance: i32) -> Self {
        self.drink_allowance = drink_allowance;
        self
    }

    /// Builds and inserts the abo model entity into the database.
    pub async fn build(self) -> Result<entity::abo_model::Model, DbErr> {
        entity::abo_model::ActiveModel {
            id: ActiveValue::Set(self.id),
            special_drinks: ActiveValue::Set(self.special_drinks),
            price_per_week: ActiveValue::Set(self.price_per_week),
            drink_allowance: ActiveValue::Set(self.drink_allowance),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an abo model with default values.
pub async fn create_abo_model(db: &DatabaseConnection) -> Result<entity::abo_model::Model, DbErr> {
    AboModelFactory::new(db).build().await
}
