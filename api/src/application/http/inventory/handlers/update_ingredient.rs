use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::UserContext,
    http::{
        inventory::validators::UpdateIngredientRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use larder_core::domain::inventory::{
    entities::Ingredient, ports::InventoryService, value_objects::UpdateIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "inventory",
    summary = "Edit an ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    request_body = UpdateIngredientRequest,
    responses(
        (status = 200, body = UpdateIngredientResponse),
        (status = 404, description = "Absent or not owned by the caller")
    )
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    user: UserContext,
    ValidateJson(payload): ValidateJson<UpdateIngredientRequest>,
) -> Result<Response<UpdateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .update_ingredient(
            user.user_id,
            ingredient_id,
            UpdateIngredientInput {
                name: payload.name,
                category: payload.category,
                quantity: payload.quantity,
                expiry_date: payload.expiry_date,
                confidence: payload.confidence,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateIngredientResponse { data: ingredient }))
}
