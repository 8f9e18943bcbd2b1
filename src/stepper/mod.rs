//! Drives a generated execution path one node at a time.
//!
//! The stepper is an explicit state machine rather than a self-rescheduling
//! timer loop: beginning a step hands the caller a [`ScheduledStep`] with
//! the delay to wait, and the caller's scheduler (an event loop, a thread
//! sleep, or nothing at all in tests) calls [`Stepper::complete_step`] when
//! that delay elapses. Auto mode therefore never begins step *n+1* before
//! step *n*'s completion callback has fired, and cancellation is a flag
//! check; a stale callback after [`Stepper::stop`] is simply ignored.

use crate::error::StepError;
use serde_json::{Value, json};
use std::time::{Duration, Instant};

mod clock;
mod record;
mod worker;

pub use clock::{Clock, MonotonicClock};
pub use record::{ExecutionRecord, StepStatus};
pub use worker::{SimulatedWorker, StepWorker};

/// How the run advances between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Completing a step immediately schedules the next one.
    Auto,
    /// Completing a step waits for an explicit [`Stepper::advance`].
    Manual,
}

/// The overall state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Errored,
    /// Cancelled by the caller; records stay inspectable and are never
    /// mutated retroactively.
    Stopped,
}

/// A step that has begun executing and whose completion the caller must
/// schedule after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledStep {
    pub index: usize,
    pub node_id: String,
    pub delay: Duration,
}

/// What happened when a step's completion callback was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Auto mode: the next step has begun, schedule it.
    Advanced { next: ScheduledStep },
    /// Manual mode: waiting for [`Stepper::advance`].
    Waiting,
    /// The last step of the path completed; the run is done.
    RunCompleted,
    /// The step's simulated work failed. Auto-advance halts; restarting
    /// with a fresh stepper is the only recovery.
    Failed { node_id: String, message: String },
    /// No step was in flight, or the run was stopped, so the callback is stale.
    Ignored,
}

/// Advances through a generated path, one node per step, tracking per-node
/// status and timing.
pub struct Stepper<W = SimulatedWorker, C = MonotonicClock> {
    path: Vec<String>,
    records: Vec<ExecutionRecord>,
    cursor: usize,
    next_index: usize,
    in_flight: Option<usize>,
    mode: RunMode,
    state: RunState,
    worker: W,
    clock: C,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl Stepper {
    /// Creates an auto-mode stepper with the default simulated worker and
    /// the production clock.
    pub fn new(path: Vec<String>) -> Self {
        Self::with_parts(path, RunMode::Auto, SimulatedWorker::default(), MonotonicClock)
    }
}

impl<W: StepWorker, C: Clock> Stepper<W, C> {
    /// Creates a stepper from caller-supplied parts.
    pub fn with_parts(path: Vec<String>, mode: RunMode, worker: W, clock: C) -> Self {
        let records = path.iter().map(|_| ExecutionRecord::pending()).collect();
        Self {
            path,
            records,
            cursor: 0,
            next_index: 0,
            in_flight: None,
            mode,
            state: RunState::Idle,
            worker,
            clock,
            started_at: None,
            finished_at: None,
        }
    }

    /// Begins the run. Returns the first step to schedule, or `None` for an
    /// empty path (the run completes immediately).
    pub fn start(&mut self) -> Option<ScheduledStep> {
        if self.state != RunState::Idle {
            return None;
        }
        let now = self.clock.now();
        self.started_at = Some(now);
        if self.path.is_empty() {
            self.state = RunState::Completed;
            self.finished_at = Some(now);
            return None;
        }
        self.state = RunState::Running;
        Some(self.begin_step(0, json!({})))
    }

    /// Delivers the completion callback for the step in flight.
    pub fn complete_step(&mut self) -> StepOutcome {
        if self.state != RunState::Running {
            return StepOutcome::Ignored;
        }
        let Some(index) = self.in_flight.take() else {
            return StepOutcome::Ignored;
        };

        let node_id = self.path[index].clone();
        let input = self.records[index].input.clone().unwrap_or_else(|| json!({}));
        let now = self.clock.now();

        match self.worker.produce(&node_id, &input) {
            Ok(output) => {
                let record = &mut self.records[index];
                record.status = StepStatus::Completed;
                record.output = Some(output.clone());
                record.finished_at = Some(now);

                if index + 1 >= self.path.len() {
                    self.state = RunState::Completed;
                    self.finished_at = Some(now);
                    return StepOutcome::RunCompleted;
                }

                match self.mode {
                    RunMode::Auto => StepOutcome::Advanced {
                        next: self.begin_step(index + 1, output),
                    },
                    RunMode::Manual => StepOutcome::Waiting,
                }
            }
            Err(StepError::Failed { message, .. }) => {
                let record = &mut self.records[index];
                record.status = StepStatus::Error;
                record.error = Some(message.clone());
                record.finished_at = Some(now);
                self.state = RunState::Errored;
                self.finished_at = Some(now);
                StepOutcome::Failed { node_id, message }
            }
        }
    }

    /// Manual mode: begins the next unexecuted step, feeding it the previous
    /// step's output. `None` when there is nothing to advance into.
    pub fn advance(&mut self) -> Option<ScheduledStep> {
        if self.state != RunState::Running
            || self.mode != RunMode::Manual
            || self.in_flight.is_some()
            || self.next_index >= self.path.len()
        {
            return None;
        }
        let input = self.last_output();
        Some(self.begin_step(self.next_index, input))
    }

    /// Switches between auto and manual stepping. Switching to auto mid-run
    /// with no step in flight resumes immediately; the returned step, if
    /// any, must be scheduled by the caller.
    pub fn set_mode(&mut self, mode: RunMode) -> Option<ScheduledStep> {
        self.mode = mode;
        if mode == RunMode::Auto
            && self.state == RunState::Running
            && self.in_flight.is_none()
            && self.next_index < self.path.len()
        {
            let input = self.last_output();
            return Some(self.begin_step(self.next_index, input));
        }
        None
    }

    /// Moves the inspection cursor to an already-emitted step without
    /// re-executing it. Returns false for an out-of-range index.
    pub fn select_step(&mut self, index: usize) -> bool {
        if index < self.path.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Moves the inspection cursor back one step, if possible.
    pub fn step_back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Cancels the run. The caller must drop any pending scheduled callback;
    /// one delivered anyway is ignored.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            self.in_flight = None;
            self.finished_at = Some(self.clock.now());
        }
    }

    /// Overall progress as a percentage, 0–100, non-decreasing across a run.
    pub fn progress(&self) -> f64 {
        if self.path.is_empty() {
            return if self.state == RunState::Completed { 100.0 } else { 0.0 };
        }
        let completed = self
            .records
            .iter()
            .filter(|r| r.status == StepStatus::Completed)
            .count();
        completed as f64 / self.path.len() as f64 * 100.0
    }

    /// Wall time of the run so far, or its total once finished.
    pub fn total_elapsed(&self) -> Option<Duration> {
        let started = self.started_at?;
        let end = self.finished_at.unwrap_or_else(|| self.clock.now());
        Some(end.duration_since(started))
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    /// The record at a path index.
    pub fn record(&self, index: usize) -> Option<&ExecutionRecord> {
        self.records.get(index)
    }

    /// The index the inspection cursor is on.
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// The record under the inspection cursor.
    pub fn current_record(&self) -> Option<&ExecutionRecord> {
        self.records.get(self.cursor)
    }

    fn begin_step(&mut self, index: usize, input: Value) -> ScheduledStep {
        let now = self.clock.now();
        let record = &mut self.records[index];
        record.status = StepStatus::Running;
        record.input = Some(input);
        record.started_at = Some(now);

        self.cursor = index;
        self.next_index = index + 1;
        self.in_flight = Some(index);

        let node_id = self.path[index].clone();
        let delay = self.worker.plan_delay(&node_id);
        ScheduledStep {
            index,
            node_id,
            delay,
        }
    }

    fn last_output(&self) -> Value {
        self.next_index
            .checked_sub(1)
            .and_then(|i| self.records[i].output.clone())
            .unwrap_or_else(|| json!({}))
    }
}
