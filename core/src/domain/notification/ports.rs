use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    notification::{
        entities::NotificationPreference,
        value_objects::{PushMessage, UpdatePreferenceInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait NotificationPreferenceRepository: Send + Sync {
    fn get(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<NotificationPreference>, CoreError>> + Send;

    fn upsert(
        &self,
        preference: NotificationPreference,
    ) -> impl Future<Output = Result<NotificationPreference, CoreError>> + Send;
}

/// Client trait for the push delivery service. Delivery itself is an
/// external collaborator; the core only hands over payloads.
#[cfg_attr(test, mockall::automock)]
pub trait PushClient: Send + Sync {
    fn send(&self, message: PushMessage) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for expiry notifications.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService: Send + Sync {
    fn get_preference(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<NotificationPreference, CoreError>> + Send;

    fn update_preference(
        &self,
        user_id: Uuid,
        input: UpdatePreferenceInput,
    ) -> impl Future<Output = Result<NotificationPreference, CoreError>> + Send;

    /// Re-evaluate every user's inventory and dispatch one alert per user
    /// with qualifying items. Returns the number of alerts dispatched.
    fn run_expiry_scan(
        &self,
        reference_date: NaiveDate,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
