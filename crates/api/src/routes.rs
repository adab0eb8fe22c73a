//! Route configuration.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{customer_routes, health_routes, welcome};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Prefix of the customer resource
pub const CUSTOMERS_PATH: &str = "/api/v1/customers";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(CUSTOMERS_PATH, customer_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
