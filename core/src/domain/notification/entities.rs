use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, freshness::DEFAULT_EXPIRY_THRESHOLD_DAYS};

/// Per-user expiry alert settings. A missing row means the defaults apply:
/// alerts enabled, three days of warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationPreference {
    pub user_id: Uuid,
    pub enabled: bool,
    pub expiry_days_before: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationPreference {
    pub fn default_for(user_id: Uuid) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            enabled: true,
            expiry_days_before: DEFAULT_EXPIRY_THRESHOLD_DAYS as i32,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, enabled: Option<bool>, expiry_days_before: Option<i32>) {
        let (now, _) = generate_timestamp();

        if let Some(e) = enabled {
            self.enabled = e;
        }
        if let Some(d) = expiry_days_before {
            self.expiry_days_before = d;
        }
        self.updated_at = now;
    }
}
