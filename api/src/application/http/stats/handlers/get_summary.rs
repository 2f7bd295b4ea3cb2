use axum::extract::{Query, State};

use crate::application::{
    auth::UserContext,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        stats::validators::GetSummaryParams,
    },
};
use larder_core::domain::stats::{
    ports::StatsService,
    value_objects::{CategoryCount, GetSummaryInput, InventorySummary},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSummaryResponse {
    pub total: i64,
    pub expired: i64,
    pub expiring: i64,
    pub fresh: i64,
    pub waste_saved_estimate: f64,
    pub co2_reduced_estimate: f64,
    pub by_category: Vec<CategoryCount>,
}

impl From<InventorySummary> for GetSummaryResponse {
    fn from(summary: InventorySummary) -> Self {
        Self {
            total: summary.total,
            expired: summary.expired,
            expiring: summary.expiring,
            fresh: summary.fresh,
            waste_saved_estimate: summary.waste_saved_estimate,
            co2_reduced_estimate: summary.co2_reduced_estimate,
            by_category: summary.by_category,
        }
    }
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = "stats",
    summary = "Get the caller's inventory summary",
    description = "Live bucket counts, a category histogram and the savings estimates, computed on demand",
    params(GetSummaryParams),
    responses(
        (status = 200, body = GetSummaryResponse)
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
    user: UserContext,
    Query(params): Query<GetSummaryParams>,
) -> Result<Response<GetSummaryResponse>, ApiError> {
    if let Some(threshold) = params.threshold_days
        && threshold < 0
    {
        return Err(ApiError::BadRequest(
            "threshold_days must not be negative".to_string(),
        ));
    }

    let summary = state
        .service
        .inventory_summary(GetSummaryInput {
            user_id: user.user_id,
            reference_date: params.reference_date,
            threshold_days: params.threshold_days,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSummaryResponse::from(summary)))
}
