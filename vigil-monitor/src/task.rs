//! Single-task monitor
//!
//! Polls one task to completion. Failure recovery has two distinct paths:
//! a task that reports failure is reactivated immediately, while a task
//! that reports nothing until its deadline is assumed stuck and is
//! force-terminated before reactivation. Either way the restarted attempt
//! gets a fresh full budget rather than the remainder of the old one.

use std::sync::Arc;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::config::{MonitorPolicy, POLL_INTERVAL};
use crate::error::Result;
use vigil_client::Scheduler;
use vigil_core::domain::outcome::TaskOutcome;

/// Tracks a single task to completion with stall recovery
pub struct TaskMonitor {
    client: Arc<dyn Scheduler>,
    policy: MonitorPolicy,
}

impl TaskMonitor {
    /// Creates a single-task monitor over one scheduler client
    pub fn new(client: Arc<dyn Scheduler>, policy: MonitorPolicy) -> Self {
        Self { client, policy }
    }

    /// Polls the task until it succeeds, fails out of retries, or stalls
    /// out of retries
    ///
    /// The policy budget is per attempt: every reactivation (after an
    /// explicit failure or a forced restart) resets the deadline to
    /// now + budget. A stalled task is only terminated if it has not
    /// reached a terminal state in the meantime; terminating a completed
    /// task is invalid on the scheduler side.
    pub async fn run(&self, job_id: &str, task_id: &str) -> Result<TaskOutcome> {
        self.policy.validate()?;

        let mut deadline = Instant::now() + self.policy.budget;
        let mut retries: u32 = 0;

        info!(
            "Monitoring task {}/{} for completion (budget {:?} per attempt, max retries {})",
            job_id, task_id, self.policy.budget, self.policy.max_retries
        );

        loop {
            let observation = self.client.get_task(job_id, task_id).await?;

            if observation.is_complete() {
                if observation.succeeded() {
                    info!("Task {}/{} completed successfully", job_id, task_id);
                    return Ok(TaskOutcome::Succeeded);
                }

                if retries < self.policy.max_retries {
                    retries += 1;
                    info!(
                        "Task {}/{} failed; reactivating (retry {}/{})",
                        job_id, task_id, retries, self.policy.max_retries
                    );
                    self.client.reactivate_task(job_id, task_id).await?;
                    deadline = Instant::now() + self.policy.budget;
                } else {
                    warn!(
                        "Task {}/{} failed with no retries left",
                        job_id, task_id
                    );
                    return Ok(TaskOutcome::Failed);
                }
            } else {
                debug!("Task {}/{} is {:?}", job_id, task_id, observation.state);
                sleep(POLL_INTERVAL).await;
            }

            if Instant::now() >= deadline {
                if retries < self.policy.max_retries {
                    retries += 1;
                    warn!(
                        "Task {}/{} stalled past its deadline; forcing a restart (retry {}/{})",
                        job_id, task_id, retries, self.policy.max_retries
                    );
                    // Re-check right before terminating: the task may have
                    // completed since the last poll.
                    let current = self.client.get_task(job_id, task_id).await?;
                    if !current.is_complete() {
                        self.client.terminate_task(job_id, task_id).await?;
                    }
                    self.client.reactivate_task(job_id, task_id).await?;
                    deadline = Instant::now() + self.policy.budget;
                } else {
                    warn!(
                        "Task {}/{} did not reach a terminal state within {:?}",
                        job_id, task_id, self.policy.budget
                    );
                    return Ok(TaskOutcome::TimedOut);
                }
            }
        }
    }
}
