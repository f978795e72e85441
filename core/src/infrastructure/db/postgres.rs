use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(&config.database_url).await?;

        let postgres = Self { db };
        postgres.bootstrap_schema().await?;

        Ok(postgres)
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Idempotent schema bootstrap; the app owns a single append-only table
    /// and carries no migration history.
    async fn bootstrap_schema(&self) -> Result<(), anyhow::Error> {
        self.db
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                r#"
                CREATE TABLE IF NOT EXISTS dialogs (
                    id UUID PRIMARY KEY,
                    question TEXT NOT NULL,
                    answer TEXT NOT NULL,
                    cuisine TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
                )
                "#,
            ))
            .await?;

        Ok(())
    }
}
