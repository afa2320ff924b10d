//! In-memory scheduler double for monitor tests
//!
//! Each task carries a script: a list of attempts, each attempt a sequence
//! of observations. A fetch returns the next observation of the current
//! attempt (the last one repeats); a reactivation moves the task to its
//! next scripted attempt. Recovery calls are recorded for assertions.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use vigil_client::{ClientError, Scheduler};
use vigil_core::domain::task::{ExecutionResult, TaskObservation, TaskState};

/// One scripted observation
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Active,
    Running,
    Succeeds,
    Fails,
}

impl Step {
    fn observe(self, task_id: &str) -> TaskObservation {
        let (state, result) = match self {
            Step::Active => (TaskState::Active, None),
            Step::Running => (TaskState::Running, None),
            Step::Succeeds => (TaskState::Completed, Some(ExecutionResult::Success)),
            Step::Fails => (TaskState::Completed, Some(ExecutionResult::Failure)),
        };
        TaskObservation {
            task_id: task_id.to_string(),
            state,
            execution_result: result,
            state_transition_time: None,
        }
    }
}

struct ScriptedTask {
    job_id: String,
    task_id: String,
    attempts: Vec<Vec<Step>>,
    attempt: usize,
    cursor: usize,
    fetches: usize,
}

fn observe_task(task: &mut ScriptedTask) -> TaskObservation {
    task.fetches += 1;
    let attempt = &task.attempts[task.attempt.min(task.attempts.len() - 1)];
    let step = attempt[task.cursor.min(attempt.len() - 1)];
    task.cursor += 1;
    step.observe(&task.task_id)
}

#[derive(Default)]
pub struct FakeScheduler {
    tasks: Mutex<Vec<ScriptedTask>>,
    reactivated: Mutex<Vec<(String, String)>>,
    terminated: Mutex<Vec<(String, String)>>,
    broken: Mutex<Option<(String, String)>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task with its attempt scripts; listing order is
    /// registration order.
    pub fn script(&self, job_id: &str, task_id: &str, attempts: Vec<Vec<Step>>) {
        self.tasks.lock().unwrap().push(ScriptedTask {
            job_id: job_id.to_string(),
            task_id: task_id.to_string(),
            attempts,
            attempt: 0,
            cursor: 0,
            fetches: 0,
        });
    }

    /// Makes every fetch of this task fail at the transport level.
    pub fn break_transport(&self, job_id: &str, task_id: &str) {
        *self.broken.lock().unwrap() = Some((job_id.to_string(), task_id.to_string()));
    }

    pub fn reactivations(&self, job_id: &str, task_id: &str) -> usize {
        count(&self.reactivated, job_id, task_id)
    }

    pub fn terminations(&self, job_id: &str, task_id: &str) -> usize {
        count(&self.terminated, job_id, task_id)
    }

    pub fn fetches(&self, job_id: &str, task_id: &str) -> usize {
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.job_id == job_id && t.task_id == task_id)
            .map(|t| t.fetches)
            .unwrap_or(0)
    }

    pub fn total_recovery_calls(&self) -> usize {
        self.reactivated.lock().unwrap().len() + self.terminated.lock().unwrap().len()
    }

    fn transport_error(&self, job_id: &str, task_id: &str) -> Option<ClientError> {
        let broken = self.broken.lock().unwrap();
        match &*broken {
            Some((bj, bt)) if bj == job_id && bt == task_id => {
                Some(ClientError::api_error(503, "scheduler unavailable"))
            }
            _ => None,
        }
    }
}

fn count(calls: &Mutex<Vec<(String, String)>>, job_id: &str, task_id: &str) -> usize {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|(j, t)| j == job_id && t == task_id)
        .count()
}

#[async_trait]
impl Scheduler for FakeScheduler {
    async fn list_tasks(&self, job_id: &str) -> Result<Vec<TaskObservation>, ClientError> {
        let broken = self.broken.lock().unwrap().clone();
        let mut tasks = self.tasks.lock().unwrap();
        let mut out = Vec::new();
        for task in tasks.iter_mut().filter(|t| t.job_id == job_id) {
            if let Some((bj, bt)) = &broken {
                if *bj == task.job_id && *bt == task.task_id {
                    return Err(ClientError::api_error(503, "scheduler unavailable"));
                }
            }
            out.push(observe_task(task));
        }
        Ok(out)
    }

    async fn get_task(&self, job_id: &str, task_id: &str) -> Result<TaskObservation, ClientError> {
        if let Some(err) = self.transport_error(job_id, task_id) {
            return Err(err);
        }
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.job_id == job_id && t.task_id == task_id)
            .ok_or_else(|| ClientError::NotFound(format!("{}/{}", job_id, task_id)))?;
        Ok(observe_task(task))
    }

    async fn reactivate_task(&self, job_id: &str, task_id: &str) -> Result<(), ClientError> {
        self.reactivated
            .lock()
            .unwrap()
            .push((job_id.to_string(), task_id.to_string()));
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks
            .iter_mut()
            .find(|t| t.job_id == job_id && t.task_id == task_id)
        {
            task.attempt = (task.attempt + 1).min(task.attempts.len() - 1);
            task.cursor = 0;
        }
        Ok(())
    }

    async fn terminate_task(&self, job_id: &str, task_id: &str) -> Result<(), ClientError> {
        self.terminated
            .lock()
            .unwrap()
            .push((job_id.to_string(), task_id.to_string()));
        Ok(())
    }
}
