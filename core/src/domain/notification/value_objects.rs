use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    inventory::entities::Ingredient, notification::entities::NotificationPreference,
};

/// One user's state as seen by the expiry trigger.
#[derive(Debug, Clone)]
pub struct NotificationCandidate {
    pub user_id: Uuid,
    pub preference: Option<NotificationPreference>,
    pub items: Vec<Ingredient>,
}

/// Trigger output: who gets alerted, and about what. Users with nothing
/// qualifying never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryAlert {
    pub user_id: Uuid,
    pub expiring: Vec<Ingredient>,
}

/// Payload handed to the push delivery service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub tag: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePreferenceInput {
    pub enabled: Option<bool>,
    pub expiry_days_before: Option<i32>,
}
