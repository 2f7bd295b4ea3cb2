use super::handlers::{
    cookbook_recipes::{__path_cookbook_recipes, cookbook_recipes},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipes, cookbook_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/suggestions", state.args.server.root_path),
            post(suggest_recipes),
        )
        .route(
            &format!("{}/recipes/cookbook", state.args.server.root_path),
            post(cookbook_recipes),
        )
}
