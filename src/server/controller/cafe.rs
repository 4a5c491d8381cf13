use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        abo::AboDto,
        api::ErrorDto,
        cafe::{CafeDto, CreateCafeDto, UpdateCafeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{abo::AboService, cafe::CafeService},
        state::AppState,
    },
};

/// Tag for grouping café endpoints in OpenAPI documentation
pub static CAFE_TAG: &str = "cafe";

/// Create a new café.
///
/// Validates the IBAN and BIC, derives the café ID from the given name by replacing spaces with
/// underscores and links the listed abo models that exist. Public, so new cafés can sign up.
///
/// # Returns
/// - `201 Created` - Created café
/// - `400 Bad Request` - Invalid IBAN format, IBAN checksum or BIC format
/// - `409 Conflict` - A café with this ID already exists
#[utoipa::path(
    post,
    path = "/api/cafes",
    tag = CAFE_TAG,
    request_body = CreateCafeDto,
    responses(
        (status = 201, description = "Successfully created cafe", body = CafeDto),
        (status = 400, description = "Invalid bank details", body = ErrorDto),
        (status = 409, description = "Cafe already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cafe(
    State(state): State<AppState>,
    Json(payload): Json<CreateCafeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CafeService::new(&state.db);

    let cafe = service
        .create(
            &payload.id,
            &payload.iban,
            &payload.bic,
            payload.account_holder,
            payload.abo_model_ids,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cafe.into_dto())))
}

/// Get all cafés ordered by ID.
#[utoipa::path(
    get,
    path = "/api/cafes",
    tag = CAFE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cafes", body = Vec<CafeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cafes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CafeService::new(&state.db);

    let cafes = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(cafes.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a café by ID.
#[utoipa::path(
    get,
    path = "/api/cafes/{cafe_id}",
    tag = CAFE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cafe", body = CafeDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cafe(
    State(state): State<AppState>,
    Path(cafe_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CafeService::new(&state.db);

    let cafe = service.get_by_id(&cafe_id).await?;

    Ok((StatusCode::OK, Json(cafe.into_dto())))
}

/// Update a café's bank details and extend its abo model offering.
///
/// # Access Control
/// - `Sudo` + `Cafe(cafe_id)` - Administrator of this café
///
/// # Returns
/// - `200 OK` - Updated café
/// - `400 Bad Request` - Invalid bank details
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an administrator of the café
/// - `404 Not Found` - Café not found
#[utoipa::path(
    patch,
    path = "/api/cafes/{cafe_id}",
    tag = CAFE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID")
    ),
    request_body = UpdateCafeDto,
    responses(
        (status = 200, description = "Successfully updated cafe", body = CafeDto),
        (status = 400, description = "Invalid bank details", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of this cafe", body = ErrorDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cafe(
    State(state): State<AppState>,
    session: Session,
    Path(cafe_id): Path<String>,
    Json(payload): Json<UpdateCafeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo, Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = CafeService::new(&state.db);

    let cafe = service
        .update(
            &cafe_id,
            &payload.iban,
            &payload.bic,
            payload.account_holder,
            payload.abo_model_ids,
        )
        .await?;

    Ok((StatusCode::OK, Json(cafe.into_dto())))
}

/// Delete a café together with its employees, abo model links and abos.
///
/// # Access Control
/// - `Sudo` + `Cafe(cafe_id)` - Administrator of this café
#[utoipa::path(
    delete,
    path = "/api/cafes/{cafe_id}",
    tag = CAFE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted cafe"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of this cafe", body = ErrorDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cafe(
    State(state): State<AppState>,
    session: Session,
    Path(cafe_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo, Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = CafeService::new(&state.db);

    service.delete(&cafe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get all abos of a café.
///
/// # Access Control
/// - `Cafe(cafe_id)` - Employee of this café
#[utoipa::path(
    get,
    path = "/api/cafes/{cafe_id}/abos",
    tag = CAFE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved abos", body = Vec<AboDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an employee of this cafe", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cafe_abos(
    State(state): State<AppState>,
    session: Session,
    Path(cafe_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = AboService::new(&state.db);

    let abos = service.get_by_cafe(&cafe_id).await?;

    Ok((
        StatusCode::OK,
        Json(abos.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}
