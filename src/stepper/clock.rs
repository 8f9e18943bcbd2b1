use std::time::Instant;

/// Source of monotonic timestamps for execution records.
///
/// Injected so tests can control elapsed time without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The production clock: `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
