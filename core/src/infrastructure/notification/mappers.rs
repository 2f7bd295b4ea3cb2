use crate::{
    domain::notification::entities::NotificationPreference, entity::notification_preferences,
};

impl From<&notification_preferences::Model> for NotificationPreference {
    fn from(model: &notification_preferences::Model) -> Self {
        Self {
            user_id: model.user_id,
            enabled: model.enabled,
            expiry_days_before: model.expiry_days_before,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<notification_preferences::Model> for NotificationPreference {
    fn from(model: notification_preferences::Model) -> Self {
        Self::from(&model)
    }
}
