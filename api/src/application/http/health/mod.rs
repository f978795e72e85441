use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use umami_core::domain::health::ports::HealthCheckService;
use utoipa::{OpenApi, ToSchema};

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub db_latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let db_latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        db_latency_ms,
    }))
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(get_health),
    )
}
