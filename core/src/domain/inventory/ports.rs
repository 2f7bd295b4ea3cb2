use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::{
        entities::Ingredient,
        value_objects::{
            CreateIngredientInput, GetIngredientsFilter, ImportReceiptInput,
            UpdateIngredientInput,
        },
    },
};

/// Repository trait for the inventory store. The core is read-mostly over
/// inventory; every query is owner-scoped.
#[cfg_attr(test, mockall::automock)]
pub trait InventoryRepository: Send + Sync {
    fn get_by_owner(
        &self,
        user_id: Uuid,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn create_batch(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn update(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    /// Returns the number of rows removed (0 or 1).
    fn delete(
        &self,
        ingredient_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Distinct owners that currently hold at least one item. Drives the
    /// expiry scan.
    fn owners_with_items(&self) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;
}

/// Service trait for inventory operations.
#[cfg_attr(test, mockall::automock)]
pub trait InventoryService: Send + Sync {
    fn list_ingredients(
        &self,
        user_id: Uuid,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Parse a receipt through the AI receipt parser and persist the
    /// resulting ingredients. Individually malformed records are skipped;
    /// an unparsable payload is an [`CoreError::ExternalService`] failure.
    fn import_receipt(
        &self,
        input: ImportReceiptInput,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;
}
