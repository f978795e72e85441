use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, stats::value_objects::CuisineCount};

/// Repository trait for cuisine frequency aggregation
#[cfg_attr(test, mockall::automock)]
pub trait DialogStatsRepository: Send + Sync {
    fn get_cuisine_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<CuisineCount>, CoreError>> + Send;
}

/// Service trait for the stats dashboard
#[cfg_attr(test, mockall::automock)]
pub trait StatsService: Send + Sync {
    fn get_cuisine_stats(
        &self,
    ) -> impl Future<Output = Result<Vec<CuisineCount>, CoreError>> + Send;
}
