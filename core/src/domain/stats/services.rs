use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dialog::ports::DialogRepository,
    health::ports::HealthCheckRepository,
    recipe::ports::CompletionClient,
    stats::{
        ports::{DialogStatsRepository, StatsService},
        value_objects::CuisineCount,
    },
};

impl<D, L, S, H> StatsService for Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    async fn get_cuisine_stats(&self) -> Result<Vec<CuisineCount>, CoreError> {
        self.stats_repository.get_cuisine_counts().await
    }
}
