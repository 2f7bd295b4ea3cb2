use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use larder_core::domain::notification::{
    entities::NotificationPreference, ports::NotificationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetPreferenceResponse {
    pub data: NotificationPreference,
}

#[utoipa::path(
    get,
    path = "/preference",
    tag = "notifications",
    summary = "Get the caller's expiry alert settings",
    description = "Returns the defaults (enabled, 3 days) when the caller never saved a preference",
    responses(
        (status = 200, body = GetPreferenceResponse)
    )
)]
pub async fn get_preference(
    State(state): State<AppState>,
    user: UserContext,
) -> Result<Response<GetPreferenceResponse>, ApiError> {
    let preference = state
        .service
        .get_preference(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPreferenceResponse { data: preference }))
}
