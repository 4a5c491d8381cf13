use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::employee::EmployeeRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::employee::Employee,
};

/// Requirement checked by `AuthGuard::require`.
pub enum Permission {
    /// Employee is an administrator of their café.
    Sudo,
    /// Employee belongs to the given café.
    Cafe(String),
}

/// Resolves the logged-in employee and enforces permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the employee stored in the session and checks every permission.
    ///
    /// An empty permission list only requires a logged-in employee.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Logged-in employee holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody logged in
    /// - `Err(AuthError::EmployeeNotInDatabase)` - Session refers to a deleted employee
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Employee, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);

        let Some(identity) = AuthSession::new(self.session).get_employee().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(employee) = employee_repo
            .find_by_id(&identity.cafe_id, &identity.employee_id)
            .await?
        else {
            return Err(
                AuthError::EmployeeNotInDatabase(identity.employee_id, identity.cafe_id).into(),
            );
        };

        for permission in permissions {
            match permission {
                Permission::Sudo => {
                    if !employee.sudo {
                        return Err(AuthError::AccessDenied(
                            employee.id,
                            "Employee attempted an administrator action without sudo rights"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Cafe(cafe_id) => {
                    if &employee.cafe_id != cafe_id {
                        return Err(AuthError::AccessDenied(
                            employee.id,
                            format!(
                                "Employee of cafe {} attempted to act on cafe {}",
                                employee.cafe_id, cafe_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        tracing::debug!(
            employee_id = %employee.id,
            cafe_id = %employee.cafe_id,
            "Access granted"
        );

        Ok(employee)
    }
}
