//! Monitor outcome types

use serde::{Deserialize, Serialize};

use crate::domain::task::TaskHandle;

/// Final verdict of monitoring every task in one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    /// Every task completed successfully (possibly after retries).
    Success,
    /// All tasks are terminal but these failed with no retries left,
    /// in listing order.
    FailedTasks(Vec<String>),
    /// The wall-clock budget ran out with tasks still incomplete.
    /// Task state is left untouched.
    TimedOut,
}

/// Final verdict of monitoring a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskOutcome {
    Succeeded,
    /// The task reported failure with no retries left.
    Failed,
    /// The task never reached a terminal state and the stall-recovery
    /// budget is spent.
    TimedOut,
}

/// Final verdict of racing several tasks to the first completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceOutcome {
    /// A candidate reached a terminal decision. `success` is false when the
    /// race drained every candidate's retry budget without a winner; the
    /// handle then names the last candidate to exhaust its budget.
    Decided { task: TaskHandle, success: bool },
    /// No candidate reached success before the budget expired.
    TimedOut,
}

impl RaceOutcome {
    /// The winning task, if the race was decided successfully.
    pub fn winner(&self) -> Option<&TaskHandle> {
        match self {
            Self::Decided {
                task,
                success: true,
            } => Some(task),
            _ => None,
        }
    }
}
