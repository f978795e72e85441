use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Round-trip latency of a trivial database query, in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
