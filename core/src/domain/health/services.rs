use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dialog::ports::DialogRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
    recipe::ports::CompletionClient,
    stats::ports::DialogStatsRepository,
};

impl<D, L, S, H> HealthCheckService for Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
