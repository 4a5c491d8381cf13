//! Customer factory for creating test customers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    email: String,
    payment_method: i32,
    drinks_drunk: i32,
    activated: bool,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - name: `"Customer {n}"`
    /// - email: `"customer{n}@example.com"`
    /// - payment_method: `0` (cash)
    /// - drinks_drunk: `0`
    /// - activated: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            payment_method: 0,
            drinks_drunk: 0,
            activated: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn drinks_drunk(mut self, drinks_drunk: i32) -> Self {
        self.drinks_drunk = drinks_drunk;
        self
    }

    pub fn activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            hashed_password: ActiveValue::Set("not-a-hash".to_string()),
            last_paid: ActiveValue::Set(Utc::now().date_naive()),
            activated: ActiveValue::Set(self.activated),
            payment_method: ActiveValue::Set(self.payment_method),
            drinks_drunk: ActiveValue::Set(self.drinks_drunk),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
