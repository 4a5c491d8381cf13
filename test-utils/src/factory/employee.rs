//! Employee factory for creating test employees of a café.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// The default `hashed_password` is not a valid hash; tests exercising login should create
/// employees through the service layer so the password is hashed for real.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    cafe_id: String,
    name: String,
    hashed_password: String,
    sudo: bool,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory for the given café with default values.
    ///
    /// Defaults:
    /// - id: `"employee_{n}"`
    /// - name: `"Employee {n}"`
    /// - sudo: `false`
    pub fn new(db: &'a DatabaseConnection, cafe_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("employee_{}", id),
            cafe_id: cafe_id.to_string(),
            name: format!("Employee {}", id),
            hashed_password: "not-a-hash".to_string(),
            sudo: false,
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

    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    pub fn sudo(mut self, sudo: bool) -> Self {
        self.sudo = sudo;
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            id: ActiveValue::Set(self.id),
            cafe_id: ActiveValue::Set(self.cafe_id),
            name: ActiveValue::Set(self.name),
            hashed_password: ActiveValue::Set(self.hashed_password),
            sudo: ActiveValue::Set(self.sudo),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-sudo employee of the given café.
pub async fn create_employee(
    db: &DatabaseConnection,
    cafe_id: &str,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, cafe_id).build().await
}
