use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    freshness::{self, DEFAULT_EXPIRY_THRESHOLD_DAYS, FreshnessBucket},
    inventory::entities::Ingredient,
    recipe::entities::RecipeCandidate,
};

/// Parse the generator's raw payload into candidates, or fail as a typed
/// external-service error. Never applies partially: an unparsable payload
/// yields no candidates at all. Candidates with an empty title are the
/// only per-record rejection.
pub fn parse_recipe_candidates(raw: &str) -> Result<Vec<RecipeCandidate>, CoreError> {
    let candidates: Vec<RecipeCandidate> = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("failed to parse recipe payload: {e}");
        CoreError::ExternalService(format!("failed to parse recipe payload: {e}"))
    })?;

    Ok(candidates
        .into_iter()
        .filter(|candidate| {
            if candidate.title.trim().is_empty() {
                warn!("skipping recipe candidate with empty title");
                return false;
            }
            true
        })
        .collect())
}

/// Prompt for inventory-grounded suggestions. Expiring items are listed
/// first so the generator prioritizes them.
pub fn build_suggestion_prompt(
    items: &[Ingredient],
    reference_date: NaiveDate,
    dietary: &[String],
) -> String {
    let mut expiring: Vec<&Ingredient> = Vec::new();
    let mut rest: Vec<&Ingredient> = Vec::new();

    for item in items {
        let bucket =
            freshness::classify(item.expiry_date, reference_date, DEFAULT_EXPIRY_THRESHOLD_DAYS)
                .bucket;
        match bucket {
            FreshnessBucket::ExpiringSoon => expiring.push(item),
            FreshnessBucket::Fresh => rest.push(item),
            FreshnessBucket::Expired => {}
        }
    }

    let mut prompt = String::from(
        "Suggest recipes using the ingredients on hand. For every recipe, split its \
         ingredients into used_ingredients (those on hand) and missing_ingredients \
         (those still to buy), and keep missing_ingredients short.",
    );

    if !expiring.is_empty() {
        prompt.push_str("\n\nUse these first, they expire soon: ");
        prompt.push_str(&join_names(&expiring));
        prompt.push('.');
    }
    if !rest.is_empty() {
        prompt.push_str("\n\nAlso on hand: ");
        prompt.push_str(&join_names(&rest));
        prompt.push('.');
    }
    if !dietary.is_empty() {
        prompt.push_str("\n\nDietary requirements: ");
        prompt.push_str(&dietary.join(", "));
        prompt.push('.');
    }

    prompt
}

/// Prompt for cookbook mode: generic browsing, no inventory context.
pub fn build_cookbook_prompt(query: Option<&str>) -> String {
    match query {
        Some(q) if !q.trim().is_empty() => format!(
            "Suggest everyday home-cooking recipes matching: {}. List the full \
             ingredient set of each recipe in used_ingredients and leave \
             missing_ingredients empty.",
            q.trim()
        ),
        _ => "Suggest a varied set of everyday home-cooking recipes. List the full \
              ingredient set of each recipe in used_ingredients and leave \
              missing_ingredients empty."
            .to_string(),
    }
}

fn join_names(items: &[&Ingredient]) -> String {
    items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::entities::{Category, IngredientConfig};
    use uuid::Uuid;

    #[test]
    fn unparsable_payload_yields_no_partial_candidates() {
        let err = parse_recipe_candidates("Sure! Here are three recipes...").unwrap_err();
        assert!(matches!(err, CoreError::ExternalService(_)));

        // A well-formed array with one malformed element fails as a whole:
        // the payload did not match the schema, so nothing is applied.
        let err = parse_recipe_candidates(
            r#"[{"title": "Soup", "used_ingredients": [], "missing_ingredients": [],
                 "time": "10 min", "calories": 100, "instructions": []},
                {"title": 42}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::ExternalService(_)));
    }

    #[test]
    fn candidates_with_empty_titles_are_dropped() {
        let parsed = parse_recipe_candidates(
            r#"[{"title": " ", "used_ingredients": [], "missing_ingredients": [],
                 "time": "10 min", "calories": 100, "instructions": []},
                {"title": "Soup", "used_ingredients": ["Leek"], "missing_ingredients": [],
                 "time": "10 min", "calories": 100, "instructions": ["Simmer."]}]"#,
        )
        .unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Soup");
    }

    #[test]
    fn suggestion_prompt_lists_expiring_items_first() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let items = vec![
            Ingredient::new(IngredientConfig {
                user_id: Uuid::nil(),
                name: "Rice".to_string(),
                category: Category::Pantry,
                quantity: String::new(),
                expiry_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                confidence: 1.0,
            }),
            Ingredient::new(IngredientConfig {
                user_id: Uuid::nil(),
                name: "Milk".to_string(),
                category: Category::Dairy,
                quantity: String::new(),
                expiry_date: NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
                confidence: 1.0,
            }),
        ];

        let prompt = build_suggestion_prompt(&items, reference, &[]);

        let expiring_pos = prompt.find("Milk").unwrap();
        let fresh_pos = prompt.find("Rice").unwrap();
        assert!(expiring_pos < fresh_pos);
        assert!(prompt.contains("expire soon"));
    }
}
