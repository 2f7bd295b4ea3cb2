use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::UserContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use larder_core::domain::inventory::{entities::Ingredient, ports::InventoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "inventory",
    summary = "Get one ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = GetIngredientResponse),
        (status = 404, description = "Absent or not owned by the caller")
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    user: UserContext,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient(user.user_id, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientResponse { data: ingredient }))
}
