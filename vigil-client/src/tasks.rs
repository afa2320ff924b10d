//! Task-related API endpoints

use tracing::debug;

use crate::SchedulerClient;
use crate::error::Result;
use vigil_core::domain::task::TaskObservation;

impl SchedulerClient {
    // =============================================================================
    // Task State
    // =============================================================================

    /// List the current state of every task in a job
    ///
    /// # Arguments
    /// * `job_id` - The job whose tasks to list
    ///
    /// # Returns
    /// One observation per task, in the scheduler's listing order
    pub async fn list_tasks(&self, job_id: &str) -> Result<Vec<TaskObservation>> {
        let url = format!("{}/api/jobs/{}/tasks", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the current state of a single task
    ///
    /// # Arguments
    /// * `job_id` - The job the task belongs to
    /// * `task_id` - The task to fetch
    pub async fn get_task(&self, job_id: &str, task_id: &str) -> Result<TaskObservation> {
        let url = format!("{}/api/jobs/{}/tasks/{}", self.base_url, job_id, task_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Task Recovery
    // =============================================================================

    /// Send a completed task back to the Active state for re-execution
    ///
    /// A 409 from the scheduler means the task is already Active; that is
    /// treated as success so a reactivation can never race itself.
    ///
    /// # Arguments
    /// * `job_id` - The job the task belongs to
    /// * `task_id` - The task to reactivate
    pub async fn reactivate_task(&self, job_id: &str, task_id: &str) -> Result<()> {
        let url = format!(
            "{}/api/jobs/{}/tasks/{}/reactivate",
            self.base_url, job_id, task_id
        );
        let response = self.client.post(&url).send().await?;

        if response.status().as_u16() == 409 {
            debug!("Task {}/{} already active, nothing to do", job_id, task_id);
            return Ok(());
        }

        self.handle_empty_response(response).await
    }

    /// Force a non-terminal task toward a terminal state
    ///
    /// Only valid on a task that has not completed; the monitors check the
    /// task state immediately before calling this.
    ///
    /// # Arguments
    /// * `job_id` - The job the task belongs to
    /// * `task_id` - The task to terminate
    pub async fn terminate_task(&self, job_id: &str, task_id: &str) -> Result<()> {
        let url = format!(
            "{}/api/jobs/{}/tasks/{}/terminate",
            self.base_url, job_id, task_id
        );
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
