//! Customer API Library
//!
//! HTTP REST API over the customer repository.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.service.bind_addr().parse()?;
    let state = AppState::from_config(&config.customers);

    // Build the repository up front so a bad backend fails at startup
    state.repositories.customers()?;
    info!(backend = %state.repositories.backend(), "Customer repository ready");

    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!(service = %config.service.service_name, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
