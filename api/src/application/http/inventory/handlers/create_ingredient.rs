use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::{
        inventory::validators::CreateIngredientRequest,
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
    entities::Ingredient, ports::InventoryService, value_objects::CreateIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "inventory",
    summary = "Add an ingredient",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, body = CreateIngredientResponse)
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    user: UserContext,
    ValidateJson(payload): ValidateJson<CreateIngredientRequest>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(CreateIngredientInput {
            user_id: user.user_id,
            name: payload.name,
            category: payload.category,
            quantity: payload.quantity.unwrap_or_default(),
            expiry_date: payload.expiry_date,
            confidence: payload.confidence,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateIngredientResponse {
        data: ingredient,
    }))
}
