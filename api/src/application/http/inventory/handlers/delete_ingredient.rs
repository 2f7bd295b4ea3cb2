use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::UserContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use larder_core::domain::inventory::ports::InventoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteIngredientResponse {
    pub deleted: bool,
}

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "inventory",
    summary = "Delete an ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = DeleteIngredientResponse),
        (status = 404, description = "Absent or not owned by the caller")
    )
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    user: UserContext,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    state
        .service
        .delete_ingredient(user.user_id, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIngredientResponse { deleted: true }))
}
