use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        notification::{
            entities::NotificationPreference, ports::NotificationPreferenceRepository,
        },
    },
    entity::notification_preferences::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresNotificationPreferenceRepository {
    pub db: DatabaseConnection,
}

impl PostgresNotificationPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl NotificationPreferenceRepository for PostgresNotificationPreferenceRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<NotificationPreference>, CoreError> {
        let preference = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get notification preference: {}", e);
                CoreError::InternalServerError
            })?
            .map(NotificationPreference::from);

        Ok(preference)
    }

    async fn upsert(
        &self,
        preference: NotificationPreference,
    ) -> Result<NotificationPreference, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(preference.user_id),
            enabled: Set(preference.enabled),
            expiry_days_before: Set(preference.expiry_days_before),
            created_at: Set(preference.created_at.fixed_offset()),
            updated_at: Set(preference.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Enabled,
                        Column::ExpiryDaysBefore,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert notification preference: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(NotificationPreference::from(saved))
    }
}
