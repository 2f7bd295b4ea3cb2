use std::time::Duration;

use larder_core::domain::notification::ports::NotificationService;
use tracing::{error, info};

use crate::application::http::server::app_state::AppState;

/// Periodically re-evaluate every user's inventory and dispatch expiry
/// alerts. The first tick fires right after startup.
pub fn spawn_expiry_scan(state: AppState) {
    if state.args.notifier.disabled {
        info!("expiry scan disabled by configuration");
        return;
    }

    let interval_hours = state.args.notifier.interval_hours.max(1);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_hours * 3600));

        loop {
            ticker.tick().await;

            let today = chrono::Utc::now().date_naive();
            match state.service.run_expiry_scan(today).await {
                Ok(sent) => info!(alerts = sent, "expiry scan completed"),
                Err(e) => error!(error = %e, "expiry scan failed"),
            }
        }
    });
}
