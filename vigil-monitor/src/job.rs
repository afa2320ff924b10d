//! Job monitor
//!
//! Polls every task in one job until all of them reach a terminal state or
//! the wall-clock budget expires, reactivating failed tasks while their
//! retry budget lasts.

use std::sync::Arc;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::assess::{TaskVerdict, assess};
use crate::config::{MonitorPolicy, POLL_INTERVAL};
use crate::error::Result;
use crate::ledger::RetryLedger;
use vigil_client::Scheduler;
use vigil_core::domain::outcome::JobOutcome;

/// Tracks every task in one job to completion
pub struct JobMonitor {
    client: Arc<dyn Scheduler>,
    policy: MonitorPolicy,
}

impl JobMonitor {
    /// Creates a job monitor over one scheduler client
    pub fn new(client: Arc<dyn Scheduler>, policy: MonitorPolicy) -> Self {
        Self { client, policy }
    }

    /// Polls the job until every task is terminal or the budget expires
    ///
    /// Each tick lists the job's tasks and evaluates them in listing order.
    /// A failed task with retries remaining is reactivated in place and
    /// counted against its ledger entry; a failed task at its cap is
    /// recorded as permanently failed. The call returns:
    /// - [`JobOutcome::Success`] once all tasks are terminal and none
    ///   failed permanently
    /// - [`JobOutcome::FailedTasks`] once all tasks are terminal and some
    ///   are out of retries, in listing order
    /// - [`JobOutcome::TimedOut`] when the budget expires with tasks still
    ///   incomplete; task state is left as-is
    ///
    /// Transport errors from the scheduler propagate immediately.
    pub async fn run(&self, job_id: &str) -> Result<JobOutcome> {
        self.policy.validate()?;

        let deadline = Instant::now() + self.policy.budget;
        let mut ledger = RetryLedger::new();

        info!(
            "Monitoring job {} for completion (budget {:?}, max retries {})",
            job_id, self.policy.budget, self.policy.max_retries
        );

        while Instant::now() < deadline {
            let tasks = self.client.list_tasks(job_id).await?;

            let mut incomplete: Vec<String> = Vec::new();
            let mut failed: Vec<String> = Vec::new();

            for observation in &tasks {
                let attempts = ledger.attempts(job_id, &observation.task_id);
                match assess(observation, attempts, self.policy.max_retries) {
                    TaskVerdict::Succeeded => {}
                    TaskVerdict::Pending => incomplete.push(observation.task_id.clone()),
                    TaskVerdict::Retry => {
                        info!(
                            "Reactivating failed task {}/{} (retry {}/{})",
                            job_id,
                            observation.task_id,
                            attempts + 1,
                            self.policy.max_retries
                        );
                        self.client.reactivate_task(job_id, &observation.task_id).await?;
                        ledger.record_retry(job_id, &observation.task_id);
                        incomplete.push(observation.task_id.clone());
                    }
                    TaskVerdict::Exhausted => failed.push(observation.task_id.clone()),
                }
            }

            if incomplete.is_empty() {
                return Ok(if failed.is_empty() {
                    info!("Job {} completed: all {} task(s) succeeded", job_id, tasks.len());
                    JobOutcome::Success
                } else {
                    warn!(
                        "Job {} completed with {} permanently failed task(s)",
                        job_id,
                        failed.len()
                    );
                    JobOutcome::FailedTasks(failed)
                });
            }

            debug!(
                "Job {}: {} of {} task(s) still incomplete",
                job_id,
                incomplete.len(),
                tasks.len()
            );
            sleep(POLL_INTERVAL).await;
        }

        warn!(
            "Job {} did not complete within {:?}; leaving task state untouched",
            job_id, self.policy.budget
        );
        Ok(JobOutcome::TimedOut)
    }
}
