//! Scheduler abstraction consumed by the monitors
//!
//! The trait is deliberately narrow: the monitors observe task state and
//! recover individual tasks, nothing else. Job creation and submission
//! live on [`SchedulerClient`](crate::SchedulerClient) directly.

use async_trait::async_trait;

use crate::SchedulerClient;
use crate::error::Result;
use vigil_core::domain::task::TaskObservation;

/// Remote scheduler operations the monitoring core depends on
///
/// Implemented by [`SchedulerClient`](crate::SchedulerClient) over HTTP;
/// tests substitute an in-memory implementation.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Lists the current state of every task in a job, in the
    /// scheduler's listing order.
    async fn list_tasks(&self, job_id: &str) -> Result<Vec<TaskObservation>>;

    /// Fetches the current state of a single task.
    async fn get_task(&self, job_id: &str, task_id: &str) -> Result<TaskObservation>;

    /// Transitions a completed task back to Active for re-execution.
    /// Reactivating a task that is already Active is a no-op.
    async fn reactivate_task(&self, job_id: &str, task_id: &str) -> Result<()>;

    /// Forces a non-terminal task toward a terminal state so a subsequent
    /// reactivation is well-defined.
    async fn terminate_task(&self, job_id: &str, task_id: &str) -> Result<()>;
}

#[async_trait]
impl Scheduler for SchedulerClient {
    async fn list_tasks(&self, job_id: &str) -> Result<Vec<TaskObservation>> {
        SchedulerClient::list_tasks(self, job_id).await
    }

    async fn get_task(&self, job_id: &str, task_id: &str) -> Result<TaskObservation> {
        SchedulerClient::get_task(self, job_id, task_id).await
    }

    async fn reactivate_task(&self, job_id: &str, task_id: &str) -> Result<()> {
        SchedulerClient::reactivate_task(self, job_id, task_id).await
    }

    async fn terminate_task(&self, job_id: &str, task_id: &str) -> Result<()> {
        SchedulerClient::terminate_task(self, job_id, task_id).await
    }
}
