use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::log::{LogEvent, LogGroup};

pub mod cloudwatch;

pub use cloudwatch::CloudWatchLogGateway;

pub const DEFAULT_EVENT_LIMIT: i32 = 10;

#[derive(Debug, Error)]
pub enum LogGatewayError {
    /// The gateway rejected or failed the call. Carries the rendered error chain.
    #[error("{0}")]
    Service(String),

    #[error("log gateway call timed out after {0:?}")]
    Timeout(Duration),
}

/// Read-only view of a cloud log store.
///
/// Implementations forward a single call per operation: no pagination and no
/// retries.
#[async_trait]
pub trait LogGateway: Send + Sync {
    async fn list_log_groups(&self) -> Result<Vec<LogGroup>, LogGatewayError>;

    async fn get_log_events(
        &self,
        log_group_name: &str,
        limit: i32,
    ) -> Result<Vec<LogEvent>, LogGatewayError>;
}

/// Bounds a gateway call by `timeout`.
pub async fn with_timeout<T, F>(timeout: Duration, call: F) -> Result<T, LogGatewayError>
where
    F: Future<Output = Result<T, LogGatewayError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(LogGatewayError::Timeout(timeout)),
    }
}
