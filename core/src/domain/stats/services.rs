use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    freshness::{self, DEFAULT_EXPIRY_THRESHOLD_DAYS, FreshnessBucket},
    health::ports::HealthCheckRepository,
    inventory::{
        entities::{Category, Ingredient},
        ports::InventoryRepository,
        value_objects::GetIngredientsFilter,
    },
    notification::ports::{NotificationPreferenceRepository, PushClient},
    recipe::ports::LLMClient,
    stats::{
        ports::{StatsOverrideRepository, StatsService},
        value_objects::{CategoryCount, GetSummaryInput, InventorySummary, MonthlyStatOverride},
    },
};

/// Estimated money saved per item kept out of the bin, in currency units.
pub const WASTE_SAVED_PER_ITEM: f64 = 2.5;
/// Estimated CO2 kept out of the air per item, in kilograms.
pub const CO2_REDUCED_PER_ITEM_KG: f64 = 0.5;

/// Aggregate one user's inventory snapshot into summary statistics.
///
/// Counts are always computed live. A monthly override, when present,
/// replaces only the two heuristic estimates.
pub fn summarize(
    items: &[Ingredient],
    reference_date: NaiveDate,
    threshold_days: i64,
    monthly_override: Option<&MonthlyStatOverride>,
) -> InventorySummary {
    let mut expired = 0i64;
    let mut expiring = 0i64;
    let mut fresh = 0i64;
    let mut per_category: HashMap<Category, i64> = HashMap::new();

    for item in items {
        match freshness::classify(item.expiry_date, reference_date, threshold_days).bucket {
            FreshnessBucket::Expired => expired += 1,
            FreshnessBucket::ExpiringSoon => expiring += 1,
            FreshnessBucket::Fresh => fresh += 1,
        }
        *per_category.entry(item.category).or_default() += 1;
    }

    let total = items.len() as i64;
    let not_wasted = (total - expired) as f64;

    let (waste_saved_estimate, co2_reduced_estimate) = match monthly_override {
        Some(o) => (o.waste_saved, o.co2_reduced),
        None => (
            not_wasted * WASTE_SAVED_PER_ITEM,
            not_wasted * CO2_REDUCED_PER_ITEM_KG,
        ),
    };

    // All five categories are listed, zero counts included, so proportional
    // display stays stable.
    let by_category = Category::ALL
        .iter()
        .map(|category| CategoryCount {
            category: *category,
            count: per_category.get(category).copied().unwrap_or(0),
        })
        .collect();

    InventorySummary {
        total,
        expired,
        expiring,
        fresh,
        waste_saved_estimate,
        co2_reduced_estimate,
        by_category,
    }
}

/// Order items for display: ascending expiry date, ties keeping insertion
/// order so output stays deterministic.
pub fn sort_for_display(mut items: Vec<Ingredient>) -> Vec<Ingredient> {
    items.sort_by_key(|item| item.expiry_date);
    items
}

impl<I, SO, NP, HC, L, P> StatsService for Service<I, SO, NP, HC, L, P>
where
    I: InventoryRepository,
    SO: StatsOverrideRepository,
    NP: NotificationPreferenceRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
    P: PushClient,
{
    async fn inventory_summary(
        &self,
        input: GetSummaryInput,
    ) -> Result<InventorySummary, CoreError> {
        let reference_date = input
            .reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        let threshold_days = input.threshold_days.unwrap_or(DEFAULT_EXPIRY_THRESHOLD_DAYS);

        let items = self
            .inventory_repository
            .get_by_owner(input.user_id, GetIngredientsFilter::default())
            .await?;

        let month = reference_date.format("%Y-%m").to_string();
        let monthly_override = self
            .stats_override_repository
            .get_for_month(input.user_id, month)
            .await?;

        Ok(summarize(
            &items,
            reference_date,
            threshold_days,
            monthly_override.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::entities::IngredientConfig;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, category: Category, expiry: NaiveDate) -> Ingredient {
        Ingredient::new(IngredientConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category,
            quantity: String::new(),
            expiry_date: expiry,
            confidence: 1.0,
        })
    }

    #[test]
    fn empty_inventory_summarizes_to_zero() {
        let summary = summarize(&[], date(2024, 6, 10), 3, None);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.expired, 0);
        assert_eq!(summary.expiring, 0);
        assert_eq!(summary.fresh, 0);
        assert_eq!(summary.waste_saved_estimate, 0.0);
        assert_eq!(summary.co2_reduced_estimate, 0.0);
        assert_eq!(summary.by_category.len(), 5);
        assert!(summary.by_category.iter().all(|c| c.count == 0));
    }

    #[test]
    fn bucket_counts_always_sum_to_total() {
        let reference = date(2024, 6, 10);
        let items = vec![
            item("Yoghurt", Category::Dairy, date(2024, 6, 8)),
            item("Milk", Category::Dairy, date(2024, 6, 10)),
            item("Spinach", Category::Produce, date(2024, 6, 12)),
            item("Rice", Category::Pantry, date(2024, 9, 1)),
            item("Chicken", Category::Meat, date(2024, 6, 13)),
        ];

        let summary = summarize(&items, reference, 3, None);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.expiring, 3);
        assert_eq!(summary.fresh, 1);
        assert_eq!(
            summary.expired + summary.expiring + summary.fresh,
            summary.total
        );
    }

    #[test]
    fn category_histogram_sums_to_total() {
        let reference = date(2024, 6, 10);
        let items = vec![
            item("Milk", Category::Dairy, date(2024, 6, 20)),
            item("Butter", Category::Dairy, date(2024, 6, 25)),
            item("Apples", Category::Produce, date(2024, 6, 15)),
        ];

        let summary = summarize(&items, reference, 3, None);

        let histogram_total: i64 = summary.by_category.iter().map(|c| c.count).sum();
        assert_eq!(histogram_total, summary.total);
        assert_eq!(summary.by_category.len(), 5);

        let dairy = summary
            .by_category
            .iter()
            .find(|c| c.category == Category::Dairy)
            .unwrap();
        assert_eq!(dairy.count, 2);
    }

    #[test]
    fn estimates_are_linear_in_non_expired_items() {
        let reference = date(2024, 6, 10);
        let items = vec![
            item("Old Cheese", Category::Dairy, date(2024, 6, 1)),
            item("Milk", Category::Dairy, date(2024, 6, 20)),
            item("Rice", Category::Pantry, date(2024, 9, 1)),
        ];

        let summary = summarize(&items, reference, 3, None);

        assert_eq!(summary.waste_saved_estimate, 2.0 * WASTE_SAVED_PER_ITEM);
        assert_eq!(summary.co2_reduced_estimate, 2.0 * CO2_REDUCED_PER_ITEM_KG);
    }

    #[test]
    fn monthly_override_replaces_estimates_but_not_counts() {
        let reference = date(2024, 6, 10);
        let items = vec![
            item("Old Cheese", Category::Dairy, date(2024, 6, 1)),
            item("Milk", Category::Dairy, date(2024, 6, 20)),
        ];
        let monthly_override = MonthlyStatOverride {
            user_id: Uuid::nil(),
            month: "2024-06".to_string(),
            waste_saved: 42.0,
            co2_reduced: 7.5,
        };

        let summary = summarize(&items, reference, 3, Some(&monthly_override));

        assert_eq!(summary.waste_saved_estimate, 42.0);
        assert_eq!(summary.co2_reduced_estimate, 7.5);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.fresh, 1);
    }

    #[test]
    fn display_sort_is_ascending_and_stable() {
        let items = vec![
            item("B", Category::Pantry, date(2024, 6, 20)),
            item("A", Category::Pantry, date(2024, 6, 12)),
            item("C", Category::Pantry, date(2024, 6, 12)),
            item("D", Category::Pantry, date(2024, 6, 11)),
        ];

        let sorted = sort_for_display(items);
        let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, vec!["D", "A", "C", "B"]);
    }
}
