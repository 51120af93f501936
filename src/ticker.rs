use std::time::{Duration, Instant};

/// Event poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Countdown tick period in milliseconds
pub const TICK_PERIOD_MS: u64 = 1000;

/// Get event poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// Handle to a repeating one-second tick.
/// Dropping the handle cancels the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickHandle {
    next_due: Instant,
    period: Duration,
}

impl TickHandle {
    /// Schedule a tick one period after `now`
    pub fn schedule(now: Instant) -> Self {
        let period = Duration::from_millis(TICK_PERIOD_MS);
        Self {
            next_due: now + period,
            period,
        }
    }

    /// Count the ticks that have fallen due by `now` and advance past them
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_due {
            due += 1;
            self.next_due += self.period;
        }
        due
    }
}
