use chrono::{Days, NaiveDate};
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::{
        entities::{Category, Ingredient, IngredientConfig},
        value_objects::ParsedReceiptItem,
    },
};

pub(crate) const RECEIPT_PROMPT: &str = "Extract every food item from this grocery receipt. \
For each item return its common name, one category out of Produce, Dairy, Pantry, Meat or Other, \
the purchased quantity as free text, and your confidence between 0 and 1. \
Skip non-food lines such as totals, taxes, deposits and bags.";

/// Parse the receipt parser's raw payload into loosely typed records.
///
/// A payload that is not a JSON array of records is an external-service
/// failure; individually malformed records are dealt with in
/// [`receipt_items_to_ingredients`].
pub fn parse_receipt_items(raw: &str) -> Result<Vec<ParsedReceiptItem>, CoreError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!("failed to parse receipt payload: {e}");
        CoreError::ExternalService(format!("failed to parse receipt payload: {e}"))
    })
}

/// Convert parsed receipt records into ingredients owned by `user_id`.
///
/// Validation is per record: a record that fails it is skipped and the batch
/// continues. Unknown categories coerce to `Other`; a missing confidence
/// defaults to 1.0 and out-of-range values clamp into [0, 1]. The expiry
/// date is derived from the category's default shelf life, counted from
/// `purchased_on`.
pub fn receipt_items_to_ingredients(
    user_id: Uuid,
    items: Vec<ParsedReceiptItem>,
    purchased_on: NaiveDate,
) -> Vec<Ingredient> {
    items
        .into_iter()
        .filter_map(|item| {
            let name = item.name.trim();
            if name.is_empty() {
                warn!("skipping receipt record with empty name");
                return None;
            }

            let category = item
                .category
                .as_deref()
                .map(Category::coerce)
                .unwrap_or(Category::Other);

            let shelf_life = category.default_shelf_life_days();
            let expiry_date = purchased_on
                .checked_add_days(Days::new(shelf_life as u64))
                .unwrap_or(purchased_on);

            Some(Ingredient::new(IngredientConfig {
                user_id,
                name: name.to_string(),
                category,
                quantity: item.quantity.unwrap_or_default(),
                expiry_date,
                confidence: item.confidence.unwrap_or(1.0).clamp(0.0, 1.0),
            }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unparsable_payload_is_an_external_service_error() {
        let err = parse_receipt_items("here are your items: milk, eggs").unwrap_err();
        assert!(matches!(err, CoreError::ExternalService(_)));

        let err = parse_receipt_items(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, CoreError::ExternalService(_)));
    }

    #[test]
    fn well_formed_payload_parses() {
        let items = parse_receipt_items(
            r#"[{"name": "Milk", "category": "Dairy", "quantity": "1L", "confidence": 0.92}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].confidence, Some(0.92));
    }

    #[test]
    fn malformed_records_are_skipped_without_dropping_the_batch() {
        let user = Uuid::new_v4();
        let items = vec![
            ParsedReceiptItem {
                name: "Spinach".into(),
                category: Some("Produce".into()),
                quantity: Some("200g".into()),
                confidence: Some(0.8),
            },
            ParsedReceiptItem {
                name: "   ".into(),
                category: Some("Dairy".into()),
                quantity: None,
                confidence: None,
            },
            ParsedReceiptItem {
                name: "Chicken Breast".into(),
                category: Some("meat".into()),
                quantity: None,
                confidence: Some(1.7),
            },
        ];

        let ingredients = receipt_items_to_ingredients(user, items, date(2024, 6, 10));

        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "Spinach");
        assert_eq!(ingredients[0].expiry_date, date(2024, 6, 17));
        assert_eq!(ingredients[1].category, Category::Meat);
        assert_eq!(ingredients[1].expiry_date, date(2024, 6, 14));
        assert_eq!(ingredients[1].confidence, 1.0);
    }

    #[test]
    fn unknown_category_gets_the_thirty_day_assumption() {
        let items = vec![ParsedReceiptItem {
            name: "Mystery Jar".into(),
            category: Some("Condiments".into()),
            quantity: None,
            confidence: None,
        }];

        let ingredients =
            receipt_items_to_ingredients(Uuid::new_v4(), items, date(2024, 6, 10));

        assert_eq!(ingredients[0].category, Category::Other);
        assert_eq!(ingredients[0].expiry_date, date(2024, 7, 10));
        assert_eq!(ingredients[0].confidence, 1.0);
    }
}
