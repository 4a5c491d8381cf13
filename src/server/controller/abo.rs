use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        abo::{AboDto, CreateAboDto},
        api::ErrorDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::abo::CreateAboParams,
        service::abo::AboService, state::AppState,
    },
};

/// Tag for grouping abo endpoints in OpenAPI documentation
pub static ABO_TAG: &str = "abo";

/// Create an abo for a customer.
///
/// The logged-in employee may only create abos for their own café. The café must offer the
/// requested abo model and the customer must not hold an abo yet.
///
/// # Access Control
/// - Any logged-in employee; the café scope is checked by the assignment rules
///
/// # Returns
/// - `201 Created` - Created abo
/// - `400 Bad Request` - Abo model not offered by the café
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Target café differs from the employee's café
/// - `404 Not Found` - Café or customer not found
/// - `409 Conflict` - Customer already holds an abo
#[utoipa::path(
    post,
    path = "/api/abos",
    tag = ABO_TAG,
    request_body = CreateAboDto,
    responses(
        (status = 201, description = "Successfully created abo", body = AboDto),
        (status = 400, description = "Abo model not offered by cafe", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to create abos for this cafe", body = ErrorDto),
        (status = 404, description = "Cafe or customer not found", body = ErrorDto),
        (status = 409, description = "Customer already has an abo", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_abo(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAboDto>,
) -> Result<impl IntoResponse, AppError> {
    let employee = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AboService::new(&state.db);

    let abo = service
        .create(&employee.cafe_id, CreateAboParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(abo.into_dto())))
}
