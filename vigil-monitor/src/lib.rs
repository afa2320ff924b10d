//! Vigil Monitor
//!
//! Completion tracking for tasks running on a remote batch scheduler.
//!
//! Architecture:
//! - Policy: per-call poll budget and retry cap
//! - Ledger: per-call record of consumed retries, keyed by (job, task)
//! - Assessment: pure per-observation transition function
//! - Monitors: polling loops that apply the policy until a verdict
//!
//! Three monitors cover the three tracking shapes:
//! - [`JobMonitor`] waits for every task in one job to reach a terminal
//!   state, reactivating failed tasks while their retry budget lasts.
//! - [`TaskMonitor`] waits for a single task and additionally force-restarts
//!   it when it stalls past its deadline without reporting anything.
//! - [`RaceMonitor`] tracks tasks spread over several pools or jobs and
//!   returns as soon as any one of them succeeds.
//!
//! Each monitor call owns its ledger and deadline; nothing persists between
//! calls, so concurrent monitoring of unrelated jobs needs no locking. The
//! loop polls once per second ([`POLL_INTERVAL`]); the scheduler offers no
//! push notifications. Transport errors from the scheduler are not retried
//! here and propagate to the caller; the retry policy covers task execution
//! failures only.

mod assess;
mod config;
mod error;
mod job;
mod ledger;
mod race;
mod task;

pub use config::{MonitorPolicy, POLL_INTERVAL};
pub use error::{MonitorError, Result};
pub use job::JobMonitor;
pub use race::RaceMonitor;
pub use task::TaskMonitor;

// Re-export the types a caller needs to drive the monitors
pub use vigil_core::domain::outcome::{JobOutcome, RaceOutcome, TaskOutcome};
pub use vigil_core::domain::task::TaskHandle;
