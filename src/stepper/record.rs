use serde_json::Value;
use std::time::{Duration, Instant};

/// The sub-state of a single node within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Error,
}

/// Per-node, per-run execution snapshot.
///
/// Created all-pending when a run starts, mutated as the stepper transitions
/// states, and discarded when a new run begins. Timestamps are monotonic
/// instants supplied by the run's [`Clock`](super::Clock).
#[derive(Debug, Clone)]
pub struct ExecutionRecord {
    pub status: StepStatus,
    pub input: Option<Value>,
    pub output: Option<Value>,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub error: Option<String>,
}

impl ExecutionRecord {
    pub(super) fn pending() -> Self {
        Self {
            status: StepStatus::Pending,
            input: None,
            output: None,
            started_at: None,
            finished_at: None,
            error: None,
        }
    }

    /// How long this step has been (or was) executing. `None` before the
    /// step starts; for a still-running step, measured against `now`.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        let started = self.started_at?;
        match self.finished_at {
            Some(finished) => Some(finished.duration_since(started)),
            None => Some(now.duration_since(started)),
        }
    }
}
