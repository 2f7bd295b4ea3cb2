use crate::{
    domain::inventory::entities::{Category, Ingredient},
    entity::ingredients,
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            // The column only ever holds values written through Category's
            // Display impl; coerce keeps reads total regardless.
            category: Category::coerce(&model.category),
            quantity: model.quantity.clone(),
            expiry_date: model.expiry_date,
            confidence: model.confidence,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}
