use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One persisted question/answer exchange. Append-only: the pipeline writes
/// it, only the reporting path reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dialog {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub cuisine: String,
    pub created_at: DateTime<Utc>,
}

impl Dialog {
    pub fn new(question: String, answer: String, cuisine: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            question,
            answer,
            cuisine,
            created_at: now,
        }
    }
}
