/// Generic application service wiring every domain port together.
///
/// Business logic is implemented on this struct per domain (see each
/// domain's `services.rs`); the concrete alias with Postgres-backed
/// adapters lives in [`crate::application`].
#[derive(Debug, Clone)]
pub struct Service<I, SO, NP, HC, L, P> {
    pub(crate) inventory_repository: I,
    pub(crate) stats_override_repository: SO,
    pub(crate) preference_repository: NP,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: L,
    pub(crate) push_client: P,
}

impl<I, SO, NP, HC, L, P> Service<I, SO, NP, HC, L, P> {
    pub fn new(
        inventory_repository: I,
        stats_override_repository: SO,
        preference_repository: NP,
        health_check_repository: HC,
        llm_client: L,
        push_client: P,
    ) -> Self {
        Self {
            inventory_repository,
            stats_override_repository,
            preference_repository,
            health_check_repository,
            llm_client,
            push_client,
        }
    }
}
