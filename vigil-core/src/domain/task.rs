//! Task domain types

use serde::{Deserialize, Serialize};

/// Identity of one remotely scheduled task.
///
/// A task id is unique within its job. `pool` selects which scheduler
/// client the task belongs to when racing across pools; tasks tracked
/// through a single client leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle {
    pub job_id: String,
    pub task_id: String,
    pub pool: Option<usize>,
}

impl TaskHandle {
    pub fn new(job_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            task_id: task_id.into(),
            pool: None,
        }
    }

    /// Pins the task to a scheduler client by pool index.
    pub fn with_pool(mut self, pool: usize) -> Self {
        self.pool = Some(pool);
        self
    }
}

/// Scheduler-side task state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    Active,
    Running,
    Completed,
}

/// How a completed task finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionResult {
    Success,
    Failure,
}

/// Snapshot of one task as reported by the scheduler.
///
/// Fetched fresh on every poll; never cached across ticks. The execution
/// result is only populated once the task reaches `Completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskObservation {
    pub task_id: String,
    pub state: TaskState,
    pub execution_result: Option<ExecutionResult>,
    pub state_transition_time: Option<chrono::DateTime<chrono::Utc>>,
}

impl TaskObservation {
    /// True once the task has reached a terminal state.
    pub fn is_complete(&self) -> bool {
        self.state == TaskState::Completed
    }

    /// True only for a completed task that reported success.
    ///
    /// A completed task with no execution result counts as failed; the
    /// scheduler contract attaches a result to every completion.
    pub fn succeeded(&self) -> bool {
        self.is_complete() && self.execution_result == Some(ExecutionResult::Success)
    }
}
