use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    freshness::{self, FreshnessBucket},
    health::ports::HealthCheckRepository,
    inventory::{ports::InventoryRepository, value_objects::GetIngredientsFilter},
    notification::{
        entities::NotificationPreference,
        ports::{NotificationPreferenceRepository, NotificationService, PushClient},
        value_objects::{
            ExpiryAlert, NotificationCandidate, PushMessage, UpdatePreferenceInput,
        },
    },
    recipe::ports::LLMClient,
    stats::{ports::StatsOverrideRepository, services::sort_for_display},
};

/// Decide who receives an expiry alert. Pure over its inputs; delivery is
/// the caller's concern.
///
/// A user qualifies when alerts are enabled (default when no preference row
/// exists) and at least one item falls inside their warning window
/// (`0 <= days_until_expiry <= expiry_days_before`). Alert items are sorted
/// most urgent first.
pub fn users_to_notify(
    candidates: Vec<NotificationCandidate>,
    reference_date: NaiveDate,
) -> Vec<ExpiryAlert> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let preference = candidate
                .preference
                .unwrap_or_else(|| NotificationPreference::default_for(candidate.user_id));
            if !preference.enabled {
                return None;
            }

            let window = i64::from(preference.expiry_days_before);
            let expiring: Vec<_> = candidate
                .items
                .into_iter()
                .filter(|item| {
                    freshness::classify(item.expiry_date, reference_date, window).bucket
                        == FreshnessBucket::ExpiringSoon
                })
                .collect();

            if expiring.is_empty() {
                return None;
            }

            Some(ExpiryAlert {
                user_id: candidate.user_id,
                expiring: sort_for_display(expiring),
            })
        })
        .collect()
}

/// Render an alert as a push payload.
pub fn render_push_message(alert: &ExpiryAlert) -> PushMessage {
    let names: Vec<&str> = alert.expiring.iter().map(|i| i.name.as_str()).collect();
    let body = match names.as_slice() {
        [single] => format!("{single} expires soon. Time to use it up!"),
        [first, rest @ ..] => format!(
            "{first} and {} more item(s) expire soon. Time to use them up!",
            rest.len()
        ),
        [] => String::new(),
    };

    PushMessage {
        user_id: alert.user_id,
        title: "Food expiring soon".to_string(),
        body,
        tag: "expiry-alert".to_string(),
        data: serde_json::json!({ "expiring": names }),
    }
}

impl<I, SO, NP, HC, L, P> NotificationService for Service<I, SO, NP, HC, L, P>
where
    I: InventoryRepository,
    SO: StatsOverrideRepository,
    NP: NotificationPreferenceRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
    P: PushClient,
{
    async fn get_preference(&self, user_id: Uuid) -> Result<NotificationPreference, CoreError> {
        Ok(self
            .preference_repository
            .get(user_id)
            .await?
            .unwrap_or_else(|| NotificationPreference::default_for(user_id)))
    }

    async fn update_preference(
        &self,
        user_id: Uuid,
        input: UpdatePreferenceInput,
    ) -> Result<NotificationPreference, CoreError> {
        if let Some(days) = input.expiry_days_before
            && days < 0
        {
            return Err(CoreError::Validation(
                "expiry_days_before must not be negative".to_string(),
            ));
        }

        let mut preference = self
            .preference_repository
            .get(user_id)
            .await?
            .unwrap_or_else(|| NotificationPreference::default_for(user_id));

        preference.update(input.enabled, input.expiry_days_before);

        self.preference_repository.upsert(preference).await
    }

    async fn run_expiry_scan(&self, reference_date: NaiveDate) -> Result<usize, CoreError> {
        let owners = self.inventory_repository.owners_with_items().await?;

        let mut candidates = Vec::with_capacity(owners.len());
        for user_id in owners {
            let items = self
                .inventory_repository
                .get_by_owner(user_id, GetIngredientsFilter::default())
                .await?;
            let preference = self.preference_repository.get(user_id).await?;
            candidates.push(NotificationCandidate {
                user_id,
                preference,
                items,
            });
        }

        let alerts = users_to_notify(candidates, reference_date);

        let mut sent = 0usize;
        for alert in &alerts {
            match self.push_client.send(render_push_message(alert)).await {
                Ok(()) => sent += 1,
                // Push delivery is best-effort: one dead subscription must
                // not starve the rest of the scan.
                Err(e) => {
                    warn!(user_id = %alert.user_id, error = %e, "push delivery failed");
                }
            }
        }

        info!(alerts = alerts.len(), sent, "expiry scan finished");
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::entities::{Category, Ingredient, IngredientConfig};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, expiry: NaiveDate) -> Ingredient {
        Ingredient::new(IngredientConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category: Category::Other,
            quantity: String::new(),
            expiry_date: expiry,
            confidence: 1.0,
        })
    }

    fn preference(user_id: Uuid, enabled: bool, days: i32) -> NotificationPreference {
        let mut p = NotificationPreference::default_for(user_id);
        p.enabled = enabled;
        p.expiry_days_before = days;
        p
    }

    #[test]
    fn missing_preference_row_defaults_to_enabled_three_days() {
        let user = Uuid::new_v4();
        let reference = date(2024, 6, 10);
        let alerts = users_to_notify(
            vec![NotificationCandidate {
                user_id: user,
                preference: None,
                items: vec![item("Milk", date(2024, 6, 12)), item("Rice", date(2024, 9, 1))],
            }],
            reference,
        );

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].user_id, user);
        assert_eq!(alerts[0].expiring.len(), 1);
        assert_eq!(alerts[0].expiring[0].name, "Milk");
    }

    #[test]
    fn disabled_users_are_excluded() {
        let user = Uuid::new_v4();
        let alerts = users_to_notify(
            vec![NotificationCandidate {
                user_id: user,
                preference: Some(preference(user, false, 3)),
                items: vec![item("Milk", date(2024, 6, 11))],
            }],
            date(2024, 6, 10),
        );

        assert!(alerts.is_empty());
    }

    #[test]
    fn users_with_no_qualifying_items_get_no_empty_alert() {
        let user = Uuid::new_v4();
        let alerts = users_to_notify(
            vec![NotificationCandidate {
                user_id: user,
                preference: None,
                // Already expired items do not qualify for a warning.
                items: vec![item("Old Yoghurt", date(2024, 6, 1)), item("Rice", date(2024, 9, 1))],
            }],
            date(2024, 6, 10),
        );

        assert!(alerts.is_empty());
    }

    #[test]
    fn per_user_window_is_respected() {
        let wide = Uuid::new_v4();
        let narrow = Uuid::new_v4();
        let items = vec![item("Cheese", date(2024, 6, 15))];

        let alerts = users_to_notify(
            vec![
                NotificationCandidate {
                    user_id: wide,
                    preference: Some(preference(wide, true, 7)),
                    items: items.clone(),
                },
                NotificationCandidate {
                    user_id: narrow,
                    preference: Some(preference(narrow, true, 3)),
                    items,
                },
            ],
            date(2024, 6, 10),
        );

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].user_id, wide);
    }

    #[test]
    fn alert_items_are_sorted_most_urgent_first() {
        let user = Uuid::new_v4();
        let alerts = users_to_notify(
            vec![NotificationCandidate {
                user_id: user,
                preference: None,
                items: vec![
                    item("Later", date(2024, 6, 13)),
                    item("Sooner", date(2024, 6, 10)),
                ],
            }],
            date(2024, 6, 10),
        );

        let names: Vec<&str> = alerts[0].expiring.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Sooner", "Later"]);
    }

    #[test]
    fn push_message_carries_tag_and_names() {
        let user = Uuid::new_v4();
        let alert = ExpiryAlert {
            user_id: user,
            expiring: vec![item("Milk", date(2024, 6, 11)), item("Ham", date(2024, 6, 12))],
        };

        let message = render_push_message(&alert);

        assert_eq!(message.tag, "expiry-alert");
        assert_eq!(message.user_id, user);
        assert!(message.body.contains("Milk"));
        assert_eq!(message.data["expiring"][1], "Ham");
    }
}
