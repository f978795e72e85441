use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, health::ports::HealthCheckRepository};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();

        self.db
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                "SELECT 1",
            ))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(start.elapsed().as_millis() as u64)
    }
}
