use std::time::{Duration, Instant};

/// A scoped wall-clock budget for cooperative cancellation.
///
/// Created at the start of a long-running operation and polled between
/// iterations; polling is a pure query with no side effect. Because the check
/// is cooperative, actual overrun can exceed the budget by the cost of one
/// iteration of the polling loop.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
    budget: Duration,
}

impl Timer {
    /// Starts a timer with the given budget
    pub fn new(budget: Duration) -> Self {
        Timer {
            started: Instant::now(),
            budget,
        }
    }

    /// Returns true once the elapsed time has reached the budget
    pub fn is_time_up(&self) -> bool {
        self.elapsed() >= self.budget
    }

    /// Returns the time elapsed since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns the configured budget
    pub fn budget(&self) -> Duration {
        self.budget
    }
}
