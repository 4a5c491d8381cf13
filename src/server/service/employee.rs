use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cafe::CafeRepository, employee::EmployeeRepository},
    error::{auth::AuthError, AppError},
    model::employee::{Employee, EmployeeParams, EmployeeRecord},
    util::password::{hash_password, verify_password},
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an employee with a hashed password.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Café doesn't exist
    /// - `Err(AppError::Conflict)` - Employee ID already used in this café
    pub async fn create(&self, params: EmployeeParams) -> Result<Employee, AppError> {
        if !CafeRepository::new(self.db).exists(&params.cafe_id).await? {
            return Err(AppError::NotFound(format!(
                "Cafe {} not found",
                params.cafe_id
            )));
        }

        let repo = EmployeeRepository::new(self.db);

        if repo.find_by_id(&params.cafe_id, &params.id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Employee {} already exists in cafe {}",
                params.id, params.cafe_id
            )));
        }

        let hashed_password = hash_password(&params.password)?;

        let employee = repo
            .create(EmployeeRecord {
                cafe_id: params.cafe_id,
                id: params.id,
                name: params.name,
                hashed_password,
                sudo: params.sudo,
            })
            .await?;

        tracing::info!(
            employee_id = %employee.id,
            cafe_id = %employee.cafe_id,
            "Created employee"
        );

        Ok(employee)
    }

    /// Whether the café has no employees yet
    pub async fn cafe_has_no_employees(&self, cafe_id: &str) -> Result<bool, AppError> {
        Ok(EmployeeRepository::new(self.db)
            .count_by_cafe(cafe_id)
            .await?
            == 0)
    }

    pub async fn get(&self, cafe_id: &str, id: &str) -> Result<Employee, AppError> {
        EmployeeRepository::new(self.db)
            .find_by_id(cafe_id, id)
            .await?
            .ok_or_else(|| not_found(cafe_id, id))
    }

    pub async fn get_all_by_cafe(&self, cafe_id: &str) -> Result<Vec<Employee>, AppError> {
        Ok(EmployeeRepository::new(self.db)
            .get_all_by_cafe(cafe_id)
            .await?)
    }

    /// Replaces name, password and sudo flag. The new password is hashed again.
    pub async fn update(&self, params: EmployeeParams) -> Result<Employee, AppError> {
        let hashed_password = hash_password(&params.password)?;
        let (cafe_id, id) = (params.cafe_id.clone(), params.id.clone());

        EmployeeRepository::new(self.db)
            .update(EmployeeRecord {
                cafe_id: params.cafe_id,
                id: params.id,
                name: params.name,
                hashed_password,
                sudo: params.sudo,
            })
            .await?
            .ok_or_else(|| not_found(&cafe_id, &id))
    }

    pub async fn delete(&self, cafe_id: &str, id: &str) -> Result<(), AppError> {
        if !EmployeeRepository::new(self.db).delete(cafe_id, id).await? {
            return Err(not_found(cafe_id, id));
        }

        Ok(())
    }

    /// Checks an employee's credentials.
    ///
    /// Unknown café, unknown employee and wrong password all yield
    /// `AuthError::InvalidCredentials`.
    pub async fn authenticate(
        &self,
        cafe_id: &str,
        id: &str,
        password: &str,
    ) -> Result<Employee, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let Some(hashed_password) = repo.find_password_hash(cafe_id, id).await? else {
            tracing::debug!(cafe_id, employee_id = id, "Login for unknown employee");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hashed_password) {
            tracing::debug!(cafe_id, employee_id = id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        repo.find_by_id(cafe_id, id)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }
}

fn not_found(cafe_id: &str, id: &str) -> AppError {
    AppError::NotFound(format!("Employee {} not found in cafe {}", id, cafe_id))
}
