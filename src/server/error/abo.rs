use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons an abo request is rejected, in the order the checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AboError {
    /// The acting employee belongs to a different café than the one targeted.
    #[error("Not allowed to create abos for another cafe")]
    Forbidden,

    #[error("Cafe {0} not found")]
    CafeNotFound(String),

    /// The plan is not linked to the café, whether or not it exists elsewhere.
    #[error("Abo model {0} is not offered by cafe {1}")]
    ModelNotOffered(String, String),

    #[error("Customer {0} already has an abo")]
    CustomerAlreadySubscribed(String),
}

/// Converts abo rejections into HTTP responses.
///
/// - `Forbidden` → 403 Forbidden
/// - `CafeNotFound` → 404 Not Found
/// - `ModelNotOffered` → 400 Bad Request
/// - `CustomerAlreadySubscribed` → 409 Conflict
impl IntoResponse for AboError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::CafeNotFound(_) => StatusCode::NOT_FOUND,
            Self::ModelNotOffered(_, _) => StatusCode::BAD_REQUEST,
            Self::CustomerAlreadySubscribed(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
