use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect,
    prelude::Expr,
    sea_query::{IntoCondition, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        inventory::{
            entities::Ingredient, ports::InventoryRepository,
            value_objects::GetIngredientsFilter,
        },
    },
    entity::ingredients::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(ingredient: &Ingredient) -> ActiveModel {
        ActiveModel {
            id: Set(ingredient.id),
            user_id: Set(ingredient.user_id),
            name: Set(ingredient.name.clone()),
            category: Set(ingredient.category.to_string()),
            quantity: Set(ingredient.quantity.clone()),
            expiry_date: Set(ingredient.expiry_date),
            confidence: Set(ingredient.confidence),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        }
    }
}

impl InventoryRepository for PostgresInventoryRepository {
    async fn get_by_owner(
        &self,
        user_id: Uuid,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        let mut condition = Condition::all();

        if let Some(ref name) = filter.name_ilike {
            condition = condition.add(
                Expr::col(Column::Name)
                    .ilike(format!("%{}%", name))
                    .into_condition(),
            );
        }

        if let Some(category) = filter.category {
            condition = condition.add(Column::Category.eq(category.to_string()));
        }

        query = query.filter(condition);

        // Sort strings look like "name" or "-expiry_date,name".
        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "name" => {
                        query = query.order_by(Column::Name, order);
                    }
                    "category" => {
                        query = query.order_by(Column::Category, order);
                    }
                    "expiry_date" => {
                        query = query.order_by(Column::ExpiryDate, order);
                    }
                    "created_at" => {
                        query = query.order_by(Column::CreatedAt, order);
                    }
                    _ => {
                        // Unknown field, ignore
                    }
                }
            }
        } else {
            // Default display order: soonest expiry first; the v7 id
            // tiebreak keeps equal dates in insertion order.
            query = query
                .order_by(Column::ExpiryDate, Order::Asc)
                .order_by(Column::Id, Order::Asc);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let items = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect();

        Ok(items)
    }

    async fn get_by_id(
        &self,
        ingredient_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(Column::Id.eq(ingredient_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(Self::active_model(&ingredient))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }

    async fn create_batch(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut created = Vec::with_capacity(ingredients.len());

        for ingredient in ingredients {
            created.push(self.create(ingredient).await?);
        }

        Ok(created)
    }

    async fn update(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let updated = Entity::update(Self::active_model(&ingredient))
            .filter(Column::UserId.eq(ingredient.user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(updated))
    }

    async fn delete(&self, ingredient_id: Uuid, user_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(ingredient_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn owners_with_items(&self) -> Result<Vec<Uuid>, CoreError> {
        let owners = Entity::find()
            .select_only()
            .column(Column::UserId)
            .distinct()
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list inventory owners: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(owners)
    }
}
