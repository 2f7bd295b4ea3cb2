use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::inventory::entities::Category;

#[derive(Debug, Clone)]
pub struct CreateIngredientInput {
    pub user_id: Uuid,
    pub name: String,
    pub category: Category,
    pub quantity: String,
    pub expiry_date: NaiveDate,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateIngredientInput {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub confidence: Option<f64>,
}

/// Owner-scoped listing filter. `sort` takes field names
/// (`name|category|expiry_date`) with a `-` prefix for descending,
/// comma-separated.
#[derive(Debug, Clone, Default)]
pub struct GetIngredientsFilter {
    pub name_ilike: Option<String>,
    pub category: Option<Category>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptInputType {
    Text,
    Image,
}

#[derive(Debug, Clone)]
pub struct ImportReceiptInput {
    pub user_id: Uuid,
    pub input_type: ReceiptInputType,
    pub receipt_text: Option<String>,
    pub image_data: Option<Vec<u8>>,
}

/// Raw record shape produced by the AI receipt parser. Loosely typed on
/// purpose; per-record validation happens in
/// [`crate::domain::inventory::helpers::receipt_items_to_ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedReceiptItem {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}
