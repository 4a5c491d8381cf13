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
        customer::{CreateCustomerDto, CustomerDto, CustomerStatisticsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::customer::{CustomerParams, PaymentMethod},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Converts the request body into service parameters, rejecting unknown payment methods.
fn customer_params(dto: CreateCustomerDto) -> Result<CustomerParams, AppError> {
    let payment_method = PaymentMethod::try_from(dto.payment_method).map_err(|v| {
        AppError::BadRequest(format!(
            "Unknown payment method {}, expected 0 (cash) or 1 (PayPal)",
            v
        ))
    })?;

    Ok(CustomerParams {
        name: dto.name,
        email: dto.email,
        password: dto.password,
        payment_method,
    })
}

/// Register a new customer.
///
/// # Returns
/// - `201 Created` - Registered customer
/// - `400 Bad Request` - Unknown payment method or malformed email address
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Successfully registered customer", body = CustomerDto),
        (status = 400, description = "Invalid payment method or email address", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.register(customer_params(payload)?).await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// Get a customer's overview.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved customer", body = CustomerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);

    let customer = service.overview(&id).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Update a customer's profile, password and payment method.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    patch,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    request_body = CreateCustomerDto,
    responses(
        (status = 200, description = "Successfully updated customer", body = CustomerDto),
        (status = 400, description = "Invalid payment method or email address", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);

    let customer = service.update(&id, customer_params(payload)?).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Get a customer's statistics including their current abo.
///
/// # Access Control
/// - Any logged-in employee
#[utoipa::path(
    get,
    path = "/api/customers/{id}/statistics",
    tag = CUSTOMER_TAG,
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = CustomerStatisticsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_statistics(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);

    let statistics = service.statistics(&id).await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}
