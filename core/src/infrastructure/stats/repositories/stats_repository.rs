use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::{ports::DialogStatsRepository, value_objects::CuisineCount},
};

#[derive(Debug, Clone)]
pub struct PostgresDialogStatsRepository {
    pub db: DatabaseConnection,
}

impl PostgresDialogStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DialogStatsRepository for PostgresDialogStatsRepository {
    async fn get_cuisine_counts(&self) -> Result<Vec<CuisineCount>, CoreError> {
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT cuisine, COUNT(*) as count
            FROM dialogs
            GROUP BY cuisine
            ORDER BY count DESC, cuisine ASC
            "#,
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to aggregate cuisine counts: {}", e);
            CoreError::InternalServerError
        })?;

        let counts = rows
            .iter()
            .map(|row| {
                let cuisine = row.try_get::<String>("", "cuisine").map_err(|e| {
                    error!("Failed to read cuisine column: {}", e);
                    CoreError::InternalServerError
                })?;
                let count = row.try_get::<i64>("", "count").map_err(|e| {
                    error!("Failed to read count column: {}", e);
                    CoreError::InternalServerError
                })?;

                Ok(CuisineCount { cuisine, count })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(counts)
    }
}
