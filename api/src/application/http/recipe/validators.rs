use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestRecipesRequest {
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: Option<u32>,
    /// Dietary requirements forwarded to the generator, e.g. "vegetarian".
    #[serde(default)]
    pub dietary: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CookbookRecipesRequest {
    #[validate(length(max = 200, message = "query must be at most 200 characters"))]
    pub query: Option<String>,
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: Option<u32>,
}
