use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, is_unique_violation},
    error::AppError,
    model::customer::{Customer, CustomerParams, CustomerStatistics, NewCustomer},
    service::abo::AboService,
    util::{email::validate_email, password::hash_password},
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer with a fresh UUID, paid up as of today.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Malformed email address
    /// - `Err(AppError::Conflict)` - Email address already registered
    pub async fn register(&self, mut params: CustomerParams) -> Result<Customer, AppError> {
        params.email = validate_email(&params.email)?;

        let repo = CustomerRepository::new(self.db);

        if repo.email_taken(&params.email, None).await? {
            return Err(email_conflict(&params.email));
        }

        let hashed_password = hash_password(&params.password)?;
        let email = params.email.clone();

        let result = repo
            .create(NewCustomer {
                id: uuid::Uuid::new_v4().to_string(),
                name: params.name,
                email: params.email,
                hashed_password,
                last_paid: Utc::now().date_naive(),
                payment_method: params.payment_method,
            })
            .await;

        match result {
            Ok(customer) => {
                tracing::info!(customer_id = %customer.id, "Registered customer");
                Ok(customer)
            }
            Err(err) if is_unique_violation(&err) => Err(email_conflict(&email)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn overview(&self, id: &str) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a customer's profile and password.
    ///
    /// The email address is checked like on registration.
    pub async fn update(
        &self,
        id: &str,
        mut params: CustomerParams,
    ) -> Result<Customer, AppError> {
        params.email = validate_email(&params.email)?;

        let repo = CustomerRepository::new(self.db);

        if repo.email_taken(&params.email, Some(id)).await? {
            return Err(email_conflict(&params.email));
        }

        let hashed_password = hash_password(&params.password)?;

        repo.update(id, params, hashed_password)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Gets a customer together with their current abo
    pub async fn statistics(&self, id: &str) -> Result<CustomerStatistics, AppError> {
        let customer = self.overview(id).await?;
        let abo = AboService::new(self.db).find_by_customer(id).await?;

        Ok(CustomerStatistics { customer, abo })
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Customer {} not found", id))
}

fn email_conflict(email: &str) -> AppError {
    AppError::Conflict(format!("Email {} is already registered", email))
}
