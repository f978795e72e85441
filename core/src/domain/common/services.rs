use crate::domain::{
    dialog::ports::DialogRepository, health::ports::HealthCheckRepository,
    recipe::ports::CompletionClient, stats::ports::DialogStatsRepository,
};

/// Aggregate service over the injected ports. Each domain service trait is
/// implemented on this struct in its own `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    pub dialog_repository: D,
    pub llm_client: L,
    pub stats_repository: S,
    pub health_check_repository: H,
}

impl<D, L, S, H> Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    pub fn new(
        dialog_repository: D,
        llm_client: L,
        stats_repository: S,
        health_check_repository: H,
    ) -> Self {
        Self {
            dialog_repository,
            llm_client,
            stats_repository,
            health_check_repository,
        }
    }
}
