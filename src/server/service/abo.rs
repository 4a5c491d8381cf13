//! Abo assignment.
//!
//! Creating an abo runs a fixed sequence of checks, and the first failing check decides the
//! rejection:
//!
//! 1. The acting employee belongs to the target café, otherwise `AboError::Forbidden`. Nothing
//!    is looked up before this check passes.
//! 2. The café exists, otherwise `AboError::CafeNotFound`.
//! 3. The café offers the abo model, otherwise `AboError::ModelNotOffered`.
//! 4. The customer holds no abo yet, otherwise `AboError::CustomerAlreadySubscribed`.
//! 5. The abo is inserted under a fresh UUID v4.
//!
//! The unique index on `abo.customer_id` backs step 4 when two requests race; the store reports
//! the lost race as a duplicate and it is rejected like step 4.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        abo::{AboRepository, AboStore},
        is_foreign_key_violation,
    },
    error::{abo::AboError, AppError},
    model::abo::{Abo, AboInsert, CreateAboParams, NewAbo},
};

pub struct AboService<S> {
    store: S,
}

impl<'a> AboService<AboRepository<'a>> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: AboRepository::new(db),
        }
    }

    /// Gets all abos of a café, oldest first
    pub async fn get_by_cafe(&self, cafe_id: &str) -> Result<Vec<Abo>, AppError> {
        Ok(self.store.get_by_cafe(cafe_id).await?)
    }

    pub async fn find_by_customer(&self, customer_id: &str) -> Result<Option<Abo>, AppError> {
        Ok(self.store.find_by_customer(customer_id).await?)
    }
}

impl<S: AboStore> AboService<S> {
    /// Creates a service over any `AboStore` implementation.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Creates an abo on behalf of an employee of `principal_cafe_id`.
    ///
    /// # Arguments
    /// - `principal_cafe_id` - Café of the logged-in employee
    /// - `params` - Target café, abo model and customer
    ///
    /// # Returns
    /// - `Ok(Abo)` - The new abo
    /// - `Err(AppError::AboErr(_))` - A check failed; nothing was written
    /// - `Err(AppError::NotFound)` - The customer doesn't exist
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn create(
        &self,
        principal_cafe_id: &str,
        params: CreateAboParams,
    ) -> Result<Abo, AppError> {
        if principal_cafe_id != params.cafe_id {
            tracing::debug!(
                principal_cafe_id,
                cafe_id = %params.cafe_id,
                "Rejected abo for another cafe"
            );
            return Err(AboError::Forbidden.into());
        }

        if !self.store.cafe_exists(&params.cafe_id).await? {
            tracing::debug!(cafe_id = %params.cafe_id, "Rejected abo for unknown cafe");
            return Err(AboError::CafeNotFound(params.cafe_id).into());
        }

        if !self
            .store
            .cafe_offers_model(&params.cafe_id, &params.abo_model_id)
            .await?
        {
            tracing::debug!(
                cafe_id = %params.cafe_id,
                abo_model_id = %params.abo_model_id,
                "Rejected abo for model not offered"
            );
            return Err(AboError::ModelNotOffered(params.abo_model_id, params.cafe_id).into());
        }

        if self.store.customer_has_abo(&params.customer_id).await? {
            tracing::debug!(customer_id = %params.customer_id, "Rejected second abo");
            return Err(AboError::CustomerAlreadySubscribed(params.customer_id).into());
        }

        let customer_id = params.customer_id.clone();
        let new_abo = NewAbo {
            id: uuid::Uuid::new_v4().to_string(),
            abo_model_id: params.abo_model_id,
            customer_id: params.customer_id,
            cafe_id: params.cafe_id,
            created_at: Utc::now(),
        };

        match self.store.insert_abo(new_abo).await {
            Ok(AboInsert::Inserted(abo)) => {
                tracing::info!(abo_id = %abo.id, cafe_id = %abo.cafe_id, "Created abo");
                Ok(abo)
            }
            Ok(AboInsert::Duplicate) => {
                tracing::debug!(
                    customer_id = %customer_id,
                    "Concurrent abo insert lost to unique index"
                );
                Err(AboError::CustomerAlreadySubscribed(customer_id).into())
            }
            Err(err) if is_foreign_key_violation(&err) => Err(AppError::NotFound(format!(
                "Customer {} not found",
                customer_id
            ))),
            Err(err) => Err(err.into()),
        }
    }
}
