pub mod ingredients;
pub mod notification_preferences;
pub mod stat_overrides;
