use crate::{
    domain::common::{LarderConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        inventory::PostgresInventoryRepository,
        llm::GeminiClient,
        notification::PostgresNotificationPreferenceRepository,
        push::HttpPushClient,
        stats::PostgresStatsOverrideRepository,
    },
};

pub type LarderService = Service<
    PostgresInventoryRepository,
    PostgresStatsOverrideRepository,
    PostgresNotificationPreferenceRepository,
    PostgresHealthCheckRepository,
    GeminiClient,
    HttpPushClient,
>;

pub async fn create_service(config: LarderConfig) -> anyhow::Result<LarderService> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresInventoryRepository::new(db.clone()),
        PostgresStatsOverrideRepository::new(db.clone()),
        PostgresNotificationPreferenceRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        GeminiClient::new(config.llm),
        HttpPushClient::new(config.push),
    ))
}
