use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::{
        entities::Ingredient, ports::InventoryRepository, value_objects::GetIngredientsFilter,
    },
    notification::ports::{NotificationPreferenceRepository, PushClient},
    recipe::{
        catalog::builtin_catalog,
        entities::ScoredRecipe,
        helpers::{build_cookbook_prompt, build_suggestion_prompt, parse_recipe_candidates},
        matcher::{score_against_inventory, score_candidates},
        ports::{LLMClient, RecipeService},
        schema::get_recipe_schema,
        value_objects::{CookbookInput, SuggestRecipesInput},
    },
    stats::ports::StatsOverrideRepository,
};

fn truncate(mut recipes: Vec<ScoredRecipe>, limit: Option<u32>) -> Vec<ScoredRecipe> {
    if let Some(limit) = limit {
        recipes.truncate(limit as usize);
    }
    recipes
}

fn inventory_names(items: &[Ingredient]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

impl<I, SO, NP, HC, L, P> RecipeService for Service<I, SO, NP, HC, L, P>
where
    I: InventoryRepository,
    SO: StatsOverrideRepository,
    NP: NotificationPreferenceRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
    P: PushClient,
{
    async fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> Result<Vec<ScoredRecipe>, CoreError> {
        let items = self
            .inventory_repository
            .get_by_owner(input.user_id, GetIngredientsFilter::default())
            .await?;

        let reference_date = chrono::Utc::now().date_naive();
        let prompt = build_suggestion_prompt(&items, reference_date, &input.dietary);

        let generated = match self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema())
            .await
        {
            Ok(raw) => parse_recipe_candidates(&raw),
            Err(e) => Err(e),
        };

        let scored = match generated {
            Ok(candidates) => score_candidates(candidates, true),
            Err(e) => {
                warn!(error = %e, "recipe generator unavailable, serving catalog fallback");
                score_against_inventory(builtin_catalog(), &inventory_names(&items), true)
            }
        };

        Ok(truncate(scored, input.limit))
    }

    async fn cookbook_recipes(
        &self,
        input: CookbookInput,
    ) -> Result<Vec<ScoredRecipe>, CoreError> {
        let prompt = build_cookbook_prompt(input.query.as_deref());

        let generated = match self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema())
            .await
        {
            Ok(raw) => parse_recipe_candidates(&raw),
            Err(e) => Err(e),
        };

        let scored = match generated {
            Ok(candidates) => score_candidates(candidates, false),
            Err(e) => {
                warn!(error = %e, "recipe generator unavailable, serving catalog fallback");
                score_against_inventory(builtin_catalog(), &[], false)
            }
        };

        Ok(truncate(scored, input.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        inventory::{
            entities::{Category, IngredientConfig},
            ports::MockInventoryRepository,
        },
        notification::ports::{MockNotificationPreferenceRepository, MockPushClient},
        recipe::ports::MockLLMClient,
        stats::ports::MockStatsOverrideRepository,
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    type TestService = Service<
        MockInventoryRepository,
        MockStatsOverrideRepository,
        MockNotificationPreferenceRepository,
        MockHealthCheckRepository,
        MockLLMClient,
        MockPushClient,
    >;

    fn service(inventory: MockInventoryRepository, llm: MockLLMClient) -> TestService {
        Service::new(
            inventory,
            MockStatsOverrideRepository::new(),
            MockNotificationPreferenceRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
            MockPushClient::new(),
        )
    }

    fn pantry_item(name: &str) -> Ingredient {
        Ingredient::new(IngredientConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category: Category::Pantry,
            quantity: String::new(),
            expiry_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            confidence: 1.0,
        })
    }

    #[tokio::test]
    async fn generator_output_is_scored_and_ranked() {
        let mut inventory = MockInventoryRepository::new();
        inventory
            .expect_get_by_owner()
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                Ok(r#"[
                    {"title": "Low", "used_ingredients": ["a"],
                     "missing_ingredients": ["b", "c"], "time": "10 min",
                     "calories": 200, "instructions": ["Cook."]},
                    {"title": "High", "used_ingredients": ["a", "b", "c"],
                     "missing_ingredients": [], "time": "10 min",
                     "calories": 300, "instructions": ["Cook."]}
                ]"#
                .to_string())
            })
        });

        let service = service(inventory, llm);
        let recipes = service
            .suggest_recipes(SuggestRecipesInput {
                user_id: Uuid::new_v4(),
                limit: None,
                dietary: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "High");
        assert_eq!(recipes[0].match_percentage, 100);
        assert_eq!(recipes[1].title, "Low");
        assert_eq!(recipes[1].match_percentage, 33);
        assert!(recipes.iter().all(|r| r.personalized));
    }

    #[tokio::test]
    async fn generator_failure_falls_back_to_the_catalog() {
        let mut inventory = MockInventoryRepository::new();
        inventory.expect_get_by_owner().returning(|_, _| {
            Box::pin(async { Ok(vec![pantry_item("Eggs"), pantry_item("Milk")]) })
        });

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalService("timeout".to_string())) })
        });

        let service = service(inventory, llm);
        let recipes = service
            .suggest_recipes(SuggestRecipesInput {
                user_id: Uuid::new_v4(),
                limit: None,
                dietary: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), builtin_catalog().len());
        // Eggs and Milk are on hand, so the omelette outranks recipes with
        // nothing available.
        assert_eq!(recipes[0].title, "Vegetable Omelette");
        assert!(recipes[0].match_percentage > 0);
        assert!(recipes.windows(2).all(|w| w[0].match_percentage >= w[1].match_percentage));
    }

    #[tokio::test]
    async fn unparsable_generator_output_falls_back_without_partial_results() {
        let mut inventory = MockInventoryRepository::new();
        inventory
            .expect_get_by_owner()
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok("Sure! Here are my ideas:".to_string()) }));

        let service = service(inventory, llm);
        let recipes = service
            .suggest_recipes(SuggestRecipesInput {
                user_id: Uuid::new_v4(),
                limit: None,
                dietary: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), builtin_catalog().len());
    }

    #[tokio::test]
    async fn cookbook_mode_is_never_personalized() {
        let inventory = MockInventoryRepository::new();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                Ok(r#"[
                    {"title": "Stew", "used_ingredients": ["a", "b"],
                     "missing_ingredients": [], "time": "60 min",
                     "calories": 400, "instructions": ["Simmer."]}
                ]"#
                .to_string())
            })
        });

        let service = service(inventory, llm);
        let recipes = service
            .cookbook_recipes(CookbookInput::default())
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].match_percentage, 0);
        assert!(!recipes[0].personalized);
    }

    #[tokio::test]
    async fn limit_truncates_after_ranking() {
        let mut inventory = MockInventoryRepository::new();
        inventory
            .expect_get_by_owner()
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalService("down".to_string())) })
        });

        let service = service(inventory, llm);
        let recipes = service
            .suggest_recipes(SuggestRecipesInput {
                user_id: Uuid::new_v4(),
                limit: Some(2),
                dietary: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
    }
}
