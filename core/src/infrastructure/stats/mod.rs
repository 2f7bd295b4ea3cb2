pub mod mappers;
pub mod repositories;

pub use repositories::stats_override_repository::PostgresStatsOverrideRepository;
