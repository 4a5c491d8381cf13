use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        abo_model::{AboModelDto, UpdateAboModelDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::abo_model::AboModel,
        service::abo_model::AboModelService,
        state::AppState,
    },
};

/// Tag for grouping abo model endpoints in OpenAPI documentation
pub static ABO_MODEL_TAG: &str = "abo-model";

/// Create a new abo model.
///
/// # Access Control
/// - `Sudo` - Administrator of any café
///
/// # Returns
/// - `201 Created` - Created abo model
/// - `409 Conflict` - An abo model with this ID already exists
#[utoipa::path(
    post,
    path = "/api/abo-models",
    tag = ABO_MODEL_TAG,
    request_body = AboModelDto,
    responses(
        (status = 201, description = "Successfully created abo model", body = AboModelDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 409, description = "Abo model already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_abo_model(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AboModelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo])
        .await?;

    let service = AboModelService::new(&state.db);

    let abo_model = service.create(AboModel::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(abo_model.into_dto())))
}

/// Get all abo models ordered by ID.
#[utoipa::path(
    get,
    path = "/api/abo-models",
    tag = ABO_MODEL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved abo models", body = Vec<AboModelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_abo_models(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AboModelService::new(&state.db);

    let abo_models = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            abo_models
                .into_iter()
                .map(|m| m.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get an abo model by ID.
#[utoipa::path(
    get,
    path = "/api/abo-models/{id}",
    tag = ABO_MODEL_TAG,
    params(
        ("id" = String, Path, description = "Abo model ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved abo model", body = AboModelDto),
        (status = 404, description = "Abo model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_abo_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AboModelService::new(&state.db);

    let abo_model = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(abo_model.into_dto())))
}

/// Update an abo model.
///
/// # Access Control
/// - `Sudo` - Administrator of any café
#[utoipa::path(
    patch,
    path = "/api/abo-models/{id}",
    tag = ABO_MODEL_TAG,
    params(
        ("id" = String, Path, description = "Abo model ID")
    ),
    request_body = UpdateAboModelDto,
    responses(
        (status = 200, description = "Successfully updated abo model", body = AboModelDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Abo model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_abo_model(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAboModelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo])
        .await?;

    let service = AboModelService::new(&state.db);

    let abo_model = service
        .update(AboModel {
            id,
            special_drinks: payload.special_drinks,
            price_per_week: payload.price_per_week,
            drink_allowance: payload.drink_allowance,
        })
        .await?;

    Ok((StatusCode::OK, Json(abo_model.into_dto())))
}

/// Delete an abo model that no abo uses.
///
/// # Access Control
/// - `Sudo` - Administrator of any café
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Abos still use the model
/// - `404 Not Found` - Abo model not found
#[utoipa::path(
    delete,
    path = "/api/abo-models/{id}",
    tag = ABO_MODEL_TAG,
    params(
        ("id" = String, Path, description = "Abo model ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted abo model"),
        (status = 400, description = "Abo model still in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Abo model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_abo_model(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo])
        .await?;

    let service = AboModelService::new(&state.db);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
