use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No employee is stored in the session.
    #[error("No employee logged in")]
    UserNotInSession,

    /// The session refers to an employee that no longer exists.
    ///
    /// # Fields
    /// - Employee ID
    /// - Café ID
    #[error("Employee {0} of cafe {1} stored in session no longer exists")]
    EmployeeNotInDatabase(String, String),

    /// Login failed. Unknown café, unknown employee and wrong password are not distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Employee is logged in but lacks a required permission.
    ///
    /// # Fields
    /// - Employee ID
    /// - Detailed reason, logged server-side only
    #[error("Employee {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `EmployeeNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// The detailed reason of a denial is logged at debug level and never sent to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::EmployeeNotInDatabase(_, _) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
