use axum::extract::{Query, State};

use crate::application::{
    auth::UserContext,
    http::{
        inventory::validators::GetInventoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use larder_core::domain::{
    freshness::{self, DEFAULT_EXPIRY_THRESHOLD_DAYS, FreshnessBucket},
    inventory::{
        entities::{Category, Ingredient},
        ports::InventoryService,
        value_objects::GetIngredientsFilter,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryItemResponse {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub freshness_bucket: FreshnessBucket,
    pub days_until_expiry: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub items: Vec<InventoryItemResponse>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "List the caller's inventory",
    description = "Lists owned ingredients with their freshness, soonest expiry first unless a sort is given",
    params(GetInventoryParams),
    responses(
        (status = 200, body = ListIngredientsResponse)
    )
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    user: UserContext,
    Query(params): Query<GetInventoryParams>,
) -> Result<Response<ListIngredientsResponse>, ApiError> {
    let category = params
        .category
        .as_deref()
        .map(|raw| {
            raw.parse::<Category>()
                .map_err(|_| ApiError::BadRequest(format!("invalid category: {raw}")))
        })
        .transpose()?;

    let filter = GetIngredientsFilter {
        name_ilike: params.name,
        category,
        sort: params.sort,
        limit: params.limit,
        offset: params.offset,
    };

    let items = state
        .service
        .list_ingredients(user.user_id, filter)
        .await
        .map_err(ApiError::from)?;

    let reference_date = chrono::Utc::now().date_naive();
    let items = items
        .into_iter()
        .map(|ingredient: Ingredient| {
            let freshness = freshness::classify(
                ingredient.expiry_date,
                reference_date,
                DEFAULT_EXPIRY_THRESHOLD_DAYS,
            );
            InventoryItemResponse {
                ingredient,
                freshness_bucket: freshness.bucket,
                days_until_expiry: freshness.days_until_expiry,
            }
        })
        .collect();

    Ok(Response::OK(ListIngredientsResponse { items }))
}
