//! Race monitor
//!
//! Tracks a set of independently scheduled tasks and returns as soon as
//! any one of them completes successfully. Candidates may live on
//! different pools (one scheduler client per pool) or in different jobs
//! behind a single client; each task handle carries its own job id and
//! optional pool index, so both shapes run through the same loop.

use std::sync::Arc;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::assess::{TaskVerdict, assess};
use crate::config::{MonitorPolicy, POLL_INTERVAL};
use crate::error::{MonitorError, Result};
use crate::ledger::RetryLedger;
use vigil_client::Scheduler;
use vigil_core::domain::outcome::RaceOutcome;
use vigil_core::domain::task::TaskHandle;

/// Races several tasks to the first successful completion
pub struct RaceMonitor {
    clients: Vec<Arc<dyn Scheduler>>,
    policy: MonitorPolicy,
}

impl RaceMonitor {
    /// Creates a race across pools: candidate handles select a client by
    /// pool index (handles without a pool index use client 0)
    pub fn across_pools(clients: Vec<Arc<dyn Scheduler>>, policy: MonitorPolicy) -> Self {
        Self { clients, policy }
    }

    /// Creates a race across jobs behind one scheduler client: each
    /// candidate handle carries its own job id
    pub fn across_jobs(client: Arc<dyn Scheduler>, policy: MonitorPolicy) -> Self {
        Self {
            clients: vec![client],
            policy,
        }
    }

    /// Polls all candidates each tick until one succeeds
    ///
    /// Candidates are evaluated in the given order; within one tick the
    /// first observed success wins. A failed candidate with retries
    /// remaining is reactivated in place and stays in the race. A failed
    /// candidate out of retries drops out; once no candidate is left the
    /// call returns a failing [`RaceOutcome::Decided`] naming the last
    /// one to drop. When the budget expires without a success the call
    /// returns [`RaceOutcome::TimedOut`].
    ///
    /// Preconditions, checked up front: at least one candidate, and every
    /// pool index within the client list.
    pub async fn run(&self, candidates: &[TaskHandle]) -> Result<RaceOutcome> {
        self.policy.validate()?;

        if candidates.is_empty() {
            return Err(MonitorError::NoCandidates);
        }
        for handle in candidates {
            let pool = handle.pool.unwrap_or(0);
            if pool >= self.clients.len() {
                return Err(MonitorError::UnknownPool {
                    task_id: handle.task_id.clone(),
                    pool,
                    pools: self.clients.len(),
                });
            }
        }

        let deadline = Instant::now() + self.policy.budget;
        let mut ledger = RetryLedger::new();
        let mut eligible = vec![true; candidates.len()];
        let mut last_exhausted: Option<usize> = None;

        info!(
            "Racing {} candidate task(s) (budget {:?}, max retries {})",
            candidates.len(),
            self.policy.budget,
            self.policy.max_retries
        );

        while Instant::now() < deadline {
            for (idx, handle) in candidates.iter().enumerate() {
                if !eligible[idx] {
                    continue;
                }

                let client = &self.clients[handle.pool.unwrap_or(0)];
                let observation = client.get_task(&handle.job_id, &handle.task_id).await?;
                let attempts = ledger.attempts(&handle.job_id, &handle.task_id);

                match assess(&observation, attempts, self.policy.max_retries) {
                    TaskVerdict::Succeeded => {
                        info!(
                            "Task {}/{} won the race",
                            handle.job_id, handle.task_id
                        );
                        return Ok(RaceOutcome::Decided {
                            task: handle.clone(),
                            success: true,
                        });
                    }
                    TaskVerdict::Pending => {}
                    TaskVerdict::Retry => {
                        info!(
                            "Task {}/{} failed; reactivating (retry {}/{})",
                            handle.job_id,
                            handle.task_id,
                            attempts + 1,
                            self.policy.max_retries
                        );
                        client.reactivate_task(&handle.job_id, &handle.task_id).await?;
                        ledger.record_retry(&handle.job_id, &handle.task_id);
                    }
                    TaskVerdict::Exhausted => {
                        warn!(
                            "Task {}/{} failed with no retries left; dropping from the race",
                            handle.job_id, handle.task_id
                        );
                        eligible[idx] = false;
                        last_exhausted = Some(idx);
                    }
                }
            }

            if eligible.iter().all(|&e| !e) {
                if let Some(idx) = last_exhausted {
                    warn!("Every candidate exhausted its retries; race lost");
                    return Ok(RaceOutcome::Decided {
                        task: candidates[idx].clone(),
                        success: false,
                    });
                }
            }

            debug!(
                "No candidate terminal yet ({} still eligible)",
                eligible.iter().filter(|&&e| e).count()
            );
            sleep(POLL_INTERVAL).await;
        }

        warn!(
            "No candidate succeeded within {:?}; leaving task state untouched",
            self.policy.budget
        );
        Ok(RaceOutcome::TimedOut)
    }
}
