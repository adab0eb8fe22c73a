//! Health check and welcome handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use customer_service_lib::CustomerRepository;

use crate::state::AppState;

/// Welcome response.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub repository: RepositoryHealth,
}

/// Repository health with optional error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct RepositoryHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service name and version", body = WelcomeResponse)
    )
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Customer API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/swagger-ui".to_string(),
    })
}

/// Health check endpoint - verifies the repository answers a read.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Repository reachable", body = HealthResponse),
        (status = 503, description = "Repository unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let backend = state.repositories.backend().to_string();

    let probe = match state.repositories.customers() {
        Ok(repo) => repo.get_all_customers(0, 1).await.map(|_| ()),
        Err(e) => Err(e),
    };

    let repository = match probe {
        Ok(()) => RepositoryHealth {
            backend,
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => RepositoryHealth {
            backend,
            status: "unhealthy".to_string(),
            error: Some(e.to_string()),
        },
    };

    let healthy = repository.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        repository,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
