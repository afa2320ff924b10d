//! Error types for the monitoring core

use thiserror::Error;
use vigil_client::ClientError;

/// Result type alias for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors that end a monitoring call without a verdict
///
/// Retry decisions never surface here; a task that fails or stalls is
/// reported through the outcome types. Only transport errors and broken
/// preconditions abort a call.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A scheduler call failed at the transport level
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The poll budget was zero
    #[error("poll budget must be greater than zero")]
    ZeroBudget,

    /// A race was started with nothing to race
    #[error("no candidate tasks to monitor")]
    NoCandidates,

    /// A candidate names a pool index outside the supplied client list
    #[error("task {task_id} names pool {pool} but only {pools} scheduler client(s) were supplied")]
    UnknownPool {
        task_id: String,
        pool: usize,
        pools: usize,
    },
}
