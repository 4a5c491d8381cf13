//! Type-safe session management wrappers.
//!
//! Wraps the tower-sessions `Session` so controllers never deal with raw session keys or the
//! serialized shape of the stored values.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_EMPLOYEE: &str = "auth:employee";

/// Identity of the logged-in employee as stored in the session.
///
/// Employees are keyed by `(id, cafe_id)`, so both parts are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEmployee {
    pub employee_id: String,
    pub cafe_id: String,
}

/// Authentication session management.
///
/// Handles the logged-in employee's identity and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the employee's identity in the session after a successful login.
    ///
    /// The session ID is cycled first so a pre-login session ID cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_employee(&self, employee_id: &str, cafe_id: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(
                SESSION_AUTH_EMPLOYEE,
                SessionEmployee {
                    employee_id: employee_id.to_string(),
                    cafe_id: cafe_id.to_string(),
                },
            )
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in employee's identity.
    ///
    /// # Returns
    /// - `Ok(Some(employee))` - An employee is logged in
    /// - `Ok(None)` - No employee in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_employee(&self) -> Result<Option<SessionEmployee>, AppError> {
        Ok(self.session.get(SESSION_AUTH_EMPLOYEE).await?)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
