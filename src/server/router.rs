use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{abo, abo_model, auth, cafe, customer, employee},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "CoffeeClub API"),
    tags(
        (name = "auth", description = "Employee login and session"),
        (name = "cafe", description = "Cafes and their bank details"),
        (name = "employee", description = "Cafe staff"),
        (name = "abo-model", description = "Subscription plans"),
        (name = "abo", description = "Customer subscriptions"),
        (name = "customer", description = "Customer accounts"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me))
        .routes(routes!(cafe::create_cafe, cafe::get_cafes))
        .routes(routes!(cafe::get_cafe, cafe::update_cafe, cafe::delete_cafe))
        .routes(routes!(cafe::get_cafe_abos))
        .routes(routes!(employee::create_employee, employee::get_employees))
        .routes(routes!(
            employee::get_employee,
            employee::update_employee,
            employee::delete_employee
        ))
        .routes(routes!(
            abo_model::create_abo_model,
            abo_model::get_abo_models
        ))
        .routes(routes!(
            abo_model::get_abo_model,
            abo_model::update_abo_model,
            abo_model::delete_abo_model
        ))
        .routes(routes!(abo::create_abo))
        .routes(routes!(customer::register_customer))
        .routes(routes!(customer::get_customer, customer::update_customer))
        .routes(routes!(customer::get_customer_statistics))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
