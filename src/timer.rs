use std::time::{Duration, Instant};

/// Wall-clock stopwatch with an optional time limit.
#[derive(Clone, Debug)]
pub struct Timer {
    start: Instant,
    time_limit: Option<Duration>,
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            time_limit: None,
        }
    }
}

impl Timer {
    /// Returns a timer started now that expires after `time_limit`.
    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            time_limit: Some(time_limit),
        }
    }

    /// Returns the elapsed time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the remaining time, if there is a limit.
    pub fn remaining(&self) -> Option<Duration> {
        self.time_limit
            .map(|limit| limit.saturating_sub(self.elapsed()))
    }

    /// Returns whether the time limit is reached.
    pub fn check_time_limit(&self) -> bool {
        self.remaining().is_some_and(|remaining| remaining.is_zero())
    }
}
