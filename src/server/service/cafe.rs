use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cafe::CafeRepository, is_unique_violation},
    error::AppError,
    model::cafe::{Cafe, CreateCafeParams, UpdateCafeParams},
    util::bank::validate_bank_details,
};

pub struct CafeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CafeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a café after validating its bank details.
    ///
    /// Spaces in the requested ID are replaced with underscores. Unknown abo model IDs are
    /// skipped.
    ///
    /// # Returns
    /// - `Ok(Cafe)` - Created café with its offered abo models
    /// - `Err(AppError::BankErr(_))` - Invalid IBAN or BIC, nothing persisted
    /// - `Err(AppError::Conflict)` - A café with the resulting ID exists
    pub async fn create(
        &self,
        id: &str,
        iban: &str,
        bic: &str,
        account_holder: String,
        abo_model_ids: Vec<String>,
    ) -> Result<Cafe, AppError> {
        let bank_details = validate_bank_details(iban, bic)?;
        let id = cafe_id_from_name(id);

        let repo = CafeRepository::new(self.db);

        if repo.exists(&id).await? {
            return Err(cafe_conflict(&id));
        }

        let result = repo
            .create(CreateCafeParams {
                id: id.clone(),
                bank_details,
                account_holder,
                abo_model_ids,
            })
            .await;

        match result {
            Ok(cafe) => {
                tracing::info!(cafe_id = %cafe.id, "Created cafe");
                Ok(cafe)
            }
            Err(err) if is_unique_violation(&err) => Err(cafe_conflict(&id)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Cafe, AppError> {
        CafeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cafe {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Cafe>, AppError> {
        Ok(CafeRepository::new(self.db).get_all().await?)
    }

    /// Replaces bank details and adds abo models to the café's offering.
    ///
    /// Bank details are validated before the café is looked up.
    pub async fn update(
        &self,
        id: &str,
        iban: &str,
        bic: &str,
        account_holder: String,
        abo_model_ids: Vec<String>,
    ) -> Result<Cafe, AppError> {
        let bank_details = validate_bank_details(iban, bic)?;

        CafeRepository::new(self.db)
            .update(UpdateCafeParams {
                id: id.to_string(),
                bank_details,
                account_holder,
                abo_model_ids,
            })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cafe {} not found", id)))
    }

    /// Deletes a café with its employees, plan links and abos
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !CafeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Cafe {} not found", id)));
        }

        tracing::info!(cafe_id = id, "Deleted cafe");

        Ok(())
    }
}

fn cafe_conflict(id: &str) -> AppError {
    AppError::Conflict(format!("Cafe {} already exists", id))
}

/// Derives a café ID from its display name by replacing spaces with underscores
fn cafe_id_from_name(name: &str) -> String {
    name.replace(' ', "_")
}
