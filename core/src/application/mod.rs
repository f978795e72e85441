use crate::{
    domain::common::{UmamiConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        dialog::PostgresDialogRepository,
        health::PostgresHealthCheckRepository,
        llm::OpenAiCompletionClient,
        stats::PostgresDialogStatsRepository,
    },
};

pub type UmamiService = Service<
    PostgresDialogRepository,
    OpenAiCompletionClient,
    PostgresDialogStatsRepository,
    PostgresHealthCheckRepository,
>;

/// Builds the service graph from config. The entry point owns the lifecycle
/// of the database connection and the LLM client and passes them down; the
/// pipeline never reaches for ambient state.
pub async fn create_service(config: UmamiConfig) -> Result<UmamiService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let dialog_repository = PostgresDialogRepository::new(postgres.get_db());
    let stats_repository = PostgresDialogStatsRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let llm_client =
        OpenAiCompletionClient::new(config.llm.openai_api_key, config.llm.openai_model);

    Ok(Service::new(
        dialog_repository,
        llm_client,
        stats_repository,
        health_check_repository,
    ))
}
