use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePreferenceRequest {
    pub enabled: Option<bool>,
    /// How many days of warning before an item expires, 0 to 30.
    #[validate(range(min = 0, max = 30, message = "expiry_days_before must be between 0 and 30"))]
    pub expiry_days_before: Option<i32>,
}
