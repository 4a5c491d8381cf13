use sea_orm::DatabaseConnection;

use crate::server::{
    data::abo_model::AboModelRepository, error::AppError, model::abo_model::AboModel,
};

pub struct AboModelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AboModelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an abo model.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Price or allowance exceeds the stored range
    /// - `Err(AppError::Conflict)` - An abo model with this ID exists
    pub async fn create(&self, abo_model: AboModel) -> Result<AboModel, AppError> {
        check_range(&abo_model)?;

        let repo = AboModelRepository::new(self.db);

        if repo.find_by_id(&abo_model.id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Abo model {} already exists",
                abo_model.id
            )));
        }

        Ok(repo.create(abo_model).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<AboModel, AppError> {
        AboModelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Abo model {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<AboModel>, AppError> {
        Ok(AboModelRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, abo_model: AboModel) -> Result<AboModel, AppError> {
        check_range(&abo_model)?;

        let id = abo_model.id.clone();

        AboModelRepository::new(self.db)
            .update(abo_model)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Abo model {} not found", id)))
    }

    /// Deletes an abo model that no abo refers to.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Abos still use the model
    /// - `Err(AppError::NotFound)` - No such model
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = AboModelRepository::new(self.db);

        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(format!(
                "Abo model {} is still in use by abos",
                id
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Abo model {} not found", id)));
        }

        Ok(())
    }
}

/// Rejects values the `i32` columns cannot hold.
fn check_range(abo_model: &AboModel) -> Result<(), AppError> {
    let fields = [
        ("price_per_week", abo_model.price_per_week),
        ("drink_allowance", abo_model.drink_allowance),
    ];

    for (field, value) in fields {
        if i32::try_from(value).is_err() {
            return Err(AppError::BadRequest(format!(
                "{} must not exceed {}",
                field,
                i32::MAX
            )));
        }
    }

    Ok(())
}
