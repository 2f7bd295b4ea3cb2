use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::{
        entities::{Ingredient, IngredientConfig},
        helpers::{RECEIPT_PROMPT, parse_receipt_items, receipt_items_to_ingredients},
        ports::{InventoryRepository, InventoryService},
        schema::get_receipt_schema,
        value_objects::{
            CreateIngredientInput, GetIngredientsFilter, ImportReceiptInput, ReceiptInputType,
            UpdateIngredientInput,
        },
    },
    notification::ports::{NotificationPreferenceRepository, PushClient},
    recipe::ports::LLMClient,
    stats::ports::StatsOverrideRepository,
};

fn validate_confidence(confidence: Option<f64>) -> Result<f64, CoreError> {
    let confidence = confidence.unwrap_or(1.0);
    if !(0.0..=1.0).contains(&confidence) {
        return Err(CoreError::Validation(
            "confidence must be between 0 and 1".to_string(),
        ));
    }
    Ok(confidence)
}

impl<I, SO, NP, HC, L, P> InventoryService for Service<I, SO, NP, HC, L, P>
where
    I: InventoryRepository,
    SO: StatsOverrideRepository,
    NP: NotificationPreferenceRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
    P: PushClient,
{
    async fn list_ingredients(
        &self,
        user_id: Uuid,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        self.inventory_repository.get_by_owner(user_id, filter).await
    }

    async fn get_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> Result<Ingredient, CoreError> {
        self.inventory_repository
            .get_by_id(ingredient_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }
        let confidence = validate_confidence(input.confidence)?;

        let ingredient = Ingredient::new(IngredientConfig {
            user_id: input.user_id,
            name,
            category: input.category,
            quantity: input.quantity,
            expiry_date: input.expiry_date,
            confidence,
        });

        self.inventory_repository.create(ingredient).await
    }

    async fn update_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        input: UpdateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        if let Some(name) = &input.name
            && name.trim().is_empty()
        {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }
        if let Some(confidence) = input.confidence {
            validate_confidence(Some(confidence))?;
        }

        let mut ingredient = self
            .inventory_repository
            .get_by_id(ingredient_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ingredient.update(
            input.name,
            input.category,
            input.quantity,
            input.expiry_date,
            input.confidence,
        );

        self.inventory_repository.update(ingredient).await
    }

    async fn delete_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> Result<(), CoreError> {
        let removed = self
            .inventory_repository
            .delete(ingredient_id, user_id)
            .await?;
        if removed == 0 {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    async fn import_receipt(
        &self,
        input: ImportReceiptInput,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let response_schema = get_receipt_schema();

        let raw_response = match input.input_type {
            ReceiptInputType::Text => {
                let text = input
                    .receipt_text
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| {
                        CoreError::Validation("receipt_text must not be empty".to_string())
                    })?;
                let prompt = format!("{RECEIPT_PROMPT}\n\nReceipt:\n{text}");
                self.llm_client
                    .generate_with_text(prompt, response_schema)
                    .await?
            }
            ReceiptInputType::Image => {
                let image_data = input.image_data.filter(|d| !d.is_empty()).ok_or_else(|| {
                    CoreError::Validation("image_data must not be empty".to_string())
                })?;
                self.llm_client
                    .generate_with_image(RECEIPT_PROMPT.to_string(), image_data, response_schema)
                    .await?
            }
        };

        let parsed = parse_receipt_items(&raw_response)?;
        let today = chrono::Utc::now().date_naive();
        let ingredients = receipt_items_to_ingredients(input.user_id, parsed, today);

        if ingredients.is_empty() {
            tracing::info!(user_id = %input.user_id, "receipt import produced no valid items");
            return Ok(Vec::new());
        }

        self.inventory_repository.create_batch(ingredients).await
    }
}
