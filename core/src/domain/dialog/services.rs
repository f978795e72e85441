use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dialog::{
        entities::Dialog,
        ports::{DialogRepository, DialogService},
        value_objects::GetDialogHistoryFilter,
    },
    health::ports::HealthCheckRepository,
    recipe::ports::CompletionClient,
    stats::ports::DialogStatsRepository,
};

impl<D, L, S, H> DialogService for Service<D, L, S, H>
where
    D: DialogRepository,
    L: CompletionClient,
    S: DialogStatsRepository,
    H: HealthCheckRepository,
{
    async fn get_dialog_history(
        &self,
        filter: GetDialogHistoryFilter,
    ) -> Result<Vec<Dialog>, CoreError> {
        self.dialog_repository.get_history(filter).await
    }
}
