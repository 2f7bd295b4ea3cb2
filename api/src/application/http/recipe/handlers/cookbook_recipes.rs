use axum::extract::State;

use crate::application::{
    auth::UserContext,
    http::{
        recipe::validators::CookbookRecipesRequest,
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
    entities::ScoredRecipe, ports::RecipeService, value_objects::CookbookInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CookbookRecipesResponse {
    pub recipes: Vec<ScoredRecipe>,
}

#[utoipa::path(
    post,
    path = "/cookbook",
    tag = "recipes",
    summary = "Browse generic recipes",
    description = "Cookbook mode: no inventory context, every candidate has match 0 and personalized false",
    request_body = CookbookRecipesRequest,
    responses(
        (status = 200, body = CookbookRecipesResponse)
    )
)]
pub async fn cookbook_recipes(
    State(state): State<AppState>,
    _user: UserContext,
    ValidateJson(payload): ValidateJson<CookbookRecipesRequest>,
) -> Result<Response<CookbookRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .cookbook_recipes(CookbookInput {
            query: payload.query,
            limit: payload.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookbookRecipesResponse { recipes }))
}
