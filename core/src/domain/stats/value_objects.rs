use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of recorded questions for one cuisine. One bar on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: i64,
}
