use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        dialog::{
            entities::Dialog, ports::DialogRepository, value_objects::GetDialogHistoryFilter,
        },
    },
    entity::dialogs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDialogRepository {
    pub db: DatabaseConnection,
}

impl PostgresDialogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DialogRepository for PostgresDialogRepository {
    async fn append(&self, dialog: Dialog) -> Result<Dialog, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(dialog.id),
            question: Set(dialog.question),
            answer: Set(dialog.answer),
            cuisine: Set(dialog.cuisine),
            created_at: Set(dialog.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Dialog::from)
        .map_err(|e| {
            error!("Failed to create dialog: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_history(&self, filter: GetDialogHistoryFilter) -> Result<Vec<Dialog>, CoreError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let dialogs = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dialogs: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Dialog::from)
            .collect();

        Ok(dialogs)
    }
}
