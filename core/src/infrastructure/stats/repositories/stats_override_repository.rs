use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        stats::{ports::StatsOverrideRepository, value_objects::MonthlyStatOverride},
    },
    entity::stat_overrides::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresStatsOverrideRepository {
    pub db: DatabaseConnection,
}

impl PostgresStatsOverrideRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StatsOverrideRepository for PostgresStatsOverrideRepository {
    async fn get_for_month(
        &self,
        user_id: Uuid,
        month: String,
    ) -> Result<Option<MonthlyStatOverride>, CoreError> {
        let stat_override = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Month.eq(month))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stat override: {}", e);
                CoreError::InternalServerError
            })?
            .map(MonthlyStatOverride::from);

        Ok(stat_override)
    }
}
