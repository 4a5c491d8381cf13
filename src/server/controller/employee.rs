use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        employee::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::employee::EmployeeParams,
        service::employee::EmployeeService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Create an employee of a café.
///
/// The first employee of a café without employees can be created without logging in and is
/// always made an administrator, so a new café can bootstrap its staff.
///
/// # Access Control
/// - `Sudo` + `Cafe(cafe_id)` - Administrator of this café, unless the café has no employees
///
/// # Returns
/// - `201 Created` - Created employee
/// - `401 Unauthorized` / `403 Forbidden` - Not an administrator of the café
/// - `404 Not Found` - Café not found
/// - `409 Conflict` - Employee ID already used in this café
#[utoipa::path(
    post,
    path = "/api/cafes/{cafe_id}/employees",
    tag = EMPLOYEE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID")
    ),
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = EmployeeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of this cafe", body = ErrorDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 409, description = "Employee already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    session: Session,
    Path(cafe_id): Path<String>,
    Json(payload): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    let bootstrap = service.cafe_has_no_employees(&cafe_id).await?;
    if !bootstrap {
        let _ = AuthGuard::new(&state.db, &session)
            .require(&[Permission::Sudo, Permission::Cafe(cafe_id.clone())])
            .await?;
    }

    let employee = service
        .create(EmployeeParams {
            cafe_id,
            id: payload.id,
            name: payload.name,
            password: payload.password,
            sudo: payload.sudo || bootstrap,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(employee.into_dto())))
}

/// Get all employees of a café.
///
/// # Access Control
/// - `Cafe(cafe_id)` - Employee of this café
#[utoipa::path(
    get,
    path = "/api/cafes/{cafe_id}/employees",
    tag = EMPLOYEE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employees", body = Vec<EmployeeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an employee of this cafe", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
    Path(cafe_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = EmployeeService::new(&state.db);

    let employees = service.get_all_by_cafe(&cafe_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            employees
                .into_iter()
                .map(|e| e.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get an employee of a café.
///
/// # Access Control
/// - `Cafe(cafe_id)` - Employee of this café
#[utoipa::path(
    get,
    path = "/api/cafes/{cafe_id}/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID"),
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employee", body = EmployeeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an employee of this cafe", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    session: Session,
    Path((cafe_id, employee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = EmployeeService::new(&state.db);

    let employee = service.get(&cafe_id, &employee_id).await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Update an employee's name, password and sudo flag.
///
/// # Access Control
/// - `Sudo` + `Cafe(cafe_id)` - Administrator of this café
#[utoipa::path(
    patch,
    path = "/api/cafes/{cafe_id}/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID"),
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Successfully updated employee", body = EmployeeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of this cafe", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path((cafe_id, employee_id)): Path<(String, String)>,
    Json(payload): Json<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo, Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = EmployeeService::new(&state.db);

    let employee = service
        .update(EmployeeParams {
            cafe_id,
            id: employee_id,
            name: payload.name,
            password: payload.password,
            sudo: payload.sudo,
        })
        .await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Delete an employee of a café.
///
/// # Access Control
/// - `Sudo` + `Cafe(cafe_id)` - Administrator of this café
#[utoipa::path(
    delete,
    path = "/api/cafes/{cafe_id}/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("cafe_id" = String, Path, description = "Cafe ID"),
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted employee"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of this cafe", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path((cafe_id, employee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Sudo, Permission::Cafe(cafe_id.clone())])
        .await?;

    let service = EmployeeService::new(&state.db);

    service.delete(&cafe_id, &employee_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
