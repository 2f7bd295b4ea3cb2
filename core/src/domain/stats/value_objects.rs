use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::inventory::entities::Category;

/// On-demand aggregate over one user's live inventory. Never persisted as
/// the authoritative value; counts are always computed live.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InventorySummary {
    pub total: i64,
    pub expired: i64,
    pub expiring: i64,
    pub fresh: i64,
    pub waste_saved_estimate: f64,
    pub co2_reduced_estimate: f64,
    pub by_category: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: i64,
}

/// Persisted display-smoothing record for one calendar month. When present
/// it replaces the two heuristic estimates, never the live counts.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStatOverride {
    pub user_id: Uuid,
    pub month: String,
    pub waste_saved: f64,
    pub co2_reduced: f64,
}

#[derive(Debug, Clone)]
pub struct GetSummaryInput {
    pub user_id: Uuid,
    pub reference_date: Option<NaiveDate>,
    pub threshold_days: Option<i64>,
}
