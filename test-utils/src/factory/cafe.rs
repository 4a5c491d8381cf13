//! Café factory for creating test café entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// A valid German IBAN used as the factory default.
pub const DEFAULT_IBAN: &str = "DE89370400440532013000";

/// A valid 11-character BIC used as the factory default.
pub const DEFAULT_BIC: &str = "COBADEFFXXX";

/// Factory for creating test cafés with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let cafe = CafeFactory::new(&db)
///     .id("Cafe_Aroma")
///     .account_holder("Aroma GmbH")
///     .build()
///     .await?;
/// ```
pub struct CafeFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    iban: String,
    bic: String,
    account_holder: String,
}

impl<'a> CafeFactory<'a> {
    /// Creates a new CafeFactory with default values.
    ///
    /// Defaults:
    /// - id: `"cafe_{n}"` where n is auto-incremented
    /// - iban / bic: `DEFAULT_IBAN` / `DEFAULT_BIC`
    /// - account_holder: `"Holder {n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("cafe_{}", id),
            iban: DEFAULT_IBAN.to_string(),
            bic: DEFAULT_BIC.to_string(),
            account_holder: format!("Holder {}", id),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = iban.into();
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = bic.into();
        self
    }

    pub fn account_holder(mut self, account_holder: impl Into<String>) -> Self {
        self.account_holder = account_holder.into();
        self
    }

    /// Builds and inserts the café entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cafe::Model)` - Created café entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cafe::Model, DbErr> {
        entity::cafe::ActiveModel {
            id: ActiveValue::Set(self.id),
            iban: ActiveValue::Set(self.iban),
            bic: ActiveValue::Set(self.bic),
            account_holder: ActiveValue::Set(self.account_holder),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a café with default values.
pub async fn create_cafe(db: &DatabaseConnection) -> Result<entity::cafe::Model, DbErr> {
    CafeFactory::new(db).build().await
}

/// Links an abo model to a café so the café offers it.
///
/// # Arguments
/// - `db` - Database connection
/// - `cafe_id` - ID of an existing café
/// - `abo_model_id` - ID of an existing abo model
///
/// # Returns
/// - `Ok(())` - Link row inserted
/// - `Err(DbErr)` - Database error during insert (e.g. foreign key violation)
pub async fn offer_abo_model(
    db: &DatabaseConnection,
    cafe_id: &str,
    abo_model_id: &str,
) -> Result<(), DbErr> {
    entity::prelude::CafeAboModel::insert(entity::cafe_abo_model::ActiveModel {
        cafe_id: ActiveValue::Set(cafe_id.to_string()),
        abo_model_id: ActiveValue::Set(abo_model_id.to_string()),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
