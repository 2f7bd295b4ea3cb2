use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::{
        recipe::validators::SuggestRecipesRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use larder_core::domain::recipe::{
    entities::ScoredRecipe, ports::RecipeService, value_objects::SuggestRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestRecipesResponse {
    pub recipes: Vec<ScoredRecipe>,
}

#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "recipes",
    summary = "Suggest recipes from the caller's inventory",
    description = "Asks the generator for candidates grounded in the caller's inventory and ranks them by match percentage; serves the offline catalog when the generator is unavailable",
    request_body = SuggestRecipesRequest,
    responses(
        (status = 200, body = SuggestRecipesResponse)
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    user: UserContext,
    ValidateJson(payload): ValidateJson<SuggestRecipesRequest>,
) -> Result<Response<SuggestRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .suggest_recipes(SuggestRecipesInput {
            user_id: user.user_id,
            limit: payload.limit,
            dietary: payload.dietary,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestRecipesResponse { recipes }))
}
