use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::{
        notification::validators::UpdatePreferenceRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use larder_core::domain::notification::{
    entities::NotificationPreference, ports::NotificationService,
    value_objects::UpdatePreferenceInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferenceResponse {
    pub data: NotificationPreference,
}

#[utoipa::path(
    put,
    path = "/preference",
    tag = "notifications",
    summary = "Update the caller's expiry alert settings",
    request_body = UpdatePreferenceRequest,
    responses(
        (status = 200, body = UpdatePreferenceResponse)
    )
)]
pub async fn update_preference(
    State(state): State<AppState>,
    user: UserContext,
    ValidateJson(payload): ValidateJson<UpdatePreferenceRequest>,
) -> Result<Response<UpdatePreferenceResponse>, ApiError> {
    let preference = state
        .service
        .update_preference(
            user.user_id,
            UpdatePreferenceInput {
                enabled: payload.enabled,
                expiry_days_before: payload.expiry_days_before,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferenceResponse { data: preference }))
}
