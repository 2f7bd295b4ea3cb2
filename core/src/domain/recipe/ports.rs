use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::ScoredRecipe,
        value_objects::{CookbookInput, SuggestRecipesInput},
    },
};

/// Client trait for the generative-AI text service.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe suggestions.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Inventory-grounded suggestions, ranked by descending match. Falls
    /// back to the offline matcher over the built-in catalog when the
    /// generator is unavailable or unparsable.
    fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<Vec<ScoredRecipe>, CoreError>> + Send;

    /// Generic browsing with no inventory context: every candidate scores 0
    /// and `personalized` is false.
    fn cookbook_recipes(
        &self,
        input: CookbookInput,
    ) -> impl Future<Output = Result<Vec<ScoredRecipe>, CoreError>> + Send;
}
