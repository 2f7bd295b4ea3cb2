use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use larder_core::domain::notification::ports::NotificationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RunExpiryScanResponse {
    pub alerts_sent: usize,
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "notifications",
    summary = "Run the expiry scan now",
    description = "Manual trigger of the periodic scan; useful for operations and testing",
    responses(
        (status = 200, body = RunExpiryScanResponse)
    )
)]
pub async fn run_expiry_scan(
    State(state): State<AppState>,
    _user: UserContext,
) -> Result<Response<RunExpiryScanResponse>, ApiError> {
    let today = chrono::Utc::now().date_naive();

    let alerts_sent = state
        .service
        .run_expiry_scan(today)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RunExpiryScanResponse { alerts_sent }))
}
