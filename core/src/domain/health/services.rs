use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    inventory::ports::InventoryRepository,
    notification::ports::{NotificationPreferenceRepository, PushClient},
    recipe::ports::LLMClient,
    stats::ports::StatsOverrideRepository,
};

impl<I, SO, NP, HC, L, P> HealthCheckService for Service<I, SO, NP, HC, L, P>
where
    I: InventoryRepository,
    SO: StatsOverrideRepository,
    NP: NotificationPreferenceRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
    P: PushClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
