use chrono::NaiveDate;
use larder_core::domain::inventory::entities::Category;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateIngredientRequest {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    pub category: Category,
    #[validate(length(max = 100, message = "quantity must be at most 100 characters"))]
    pub quantity: Option<String>,
    pub expiry_date: NaiveDate,
    /// Advisory metadata, defaults to 1.0.
    #[validate(range(min = 0.0, max = 1.0, message = "confidence must be between 0 and 1"))]
    pub confidence: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateIngredientRequest {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: Option<String>,
    pub category: Option<Category>,
    #[validate(length(max = 100, message = "quantity must be at most 100 characters"))]
    pub quantity: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, max = 1.0, message = "confidence must be between 0 and 1"))]
    pub confidence: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ImportReceiptRequest {
    #[validate(length(
        min = 1,
        max = 20000,
        message = "receipt_text must be between 1 and 20000 characters"
    ))]
    pub receipt_text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ImportReceiptImageRequest {
    /// Base64-encoded receipt photo.
    #[validate(length(min = 1, message = "image_data must not be empty"))]
    pub image_data: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetInventoryParams {
    /// Case-insensitive name substring.
    pub name: Option<String>,
    /// One of Produce, Dairy, Pantry, Meat, Other.
    pub category: Option<String>,
    /// Field names (`name|category|expiry_date|created_at`), `-` prefix for
    /// descending, comma-separated.
    pub sort: Option<String>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
    #[schema(example = 0)]
    pub offset: Option<u32>,
}
