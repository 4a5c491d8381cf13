use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by bank detail validation.
///
/// Format and checksum failures of an IBAN are reported separately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankDetailsError {
    #[error("Invalid IBAN format")]
    IbanFormat,

    #[error("Invalid IBAN checksum")]
    IbanChecksum,

    #[error("Invalid BIC format")]
    BicFormat,
}

/// All bank detail errors are client errors and map to 400 Bad Request with the error's message.
impl IntoResponse for BankDetailsError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
