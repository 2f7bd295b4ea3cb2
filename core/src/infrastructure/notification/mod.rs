pub mod mappers;
pub mod repositories;

pub use repositories::preference_repository::PostgresNotificationPreferenceRepository;
