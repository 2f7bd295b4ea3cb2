use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::value_objects::{GetSummaryInput, InventorySummary, MonthlyStatOverride},
};

/// Read-only access to persisted monthly stat overrides.
#[cfg_attr(test, mockall::automock)]
pub trait StatsOverrideRepository: Send + Sync {
    /// `month` uses the `YYYY-MM` key format.
    fn get_for_month(
        &self,
        user_id: Uuid,
        month: String,
    ) -> impl Future<Output = Result<Option<MonthlyStatOverride>, CoreError>> + Send;
}

/// Service trait for inventory statistics.
#[cfg_attr(test, mockall::automock)]
pub trait StatsService: Send + Sync {
    fn inventory_summary(
        &self,
        input: GetSummaryInput,
    ) -> impl Future<Output = Result<InventorySummary, CoreError>> + Send;
}
