//! Switchyard API gateway composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dispatch;
mod dto;
mod error;
mod handlers;
mod identity;
mod middleware;
mod state;

use std::sync::Arc;

use switchyard_application::ServiceHandler;
use switchyard_core::AppError;
use switchyard_infrastructure::HttpServiceHandler;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let http_client = reqwest::Client::builder()
        .timeout(config.backend_timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build http client: {error}")))?;
    let backend = HttpServiceHandler::new(http_client, config.backend_url.as_str())?;

    let app_state = AppState {
        services: ServiceHandler::from_backend(Arc::new(backend)),
    };

    let app = api_router::build_router(
        app_state,
        config.api_prefix.as_str(),
        config.cors_allowed_origin.as_deref(),
    )?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, prefix = %config.api_prefix, backend = %config.backend_url, "switchyard-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
