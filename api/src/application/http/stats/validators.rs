use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetSummaryParams {
    /// Defaults to today.
    pub reference_date: Option<NaiveDate>,
    /// Expiring-soon window in days, defaults to 3.
    #[schema(example = 3)]
    pub threshold_days: Option<i64>,
}
