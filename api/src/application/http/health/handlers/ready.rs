use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use larder_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = ReadyResponse),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadyResponse>, ApiError> {
    let database = state
        .service
        .readiness()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReadyResponse { database }))
}
