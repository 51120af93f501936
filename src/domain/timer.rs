use super::enums::TimerMode;
use crate::ticker::TickHandle;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Number of completed pomodoros that earns a long break
pub const DEFAULT_POMODOROS_PER_LONG_BREAK: u32 = 4;

/// Length of each timer mode, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Durations {
    pub pomodoro_secs: u32,
    pub short_break_secs: u32,
    pub long_break_secs: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            pomodoro_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
        }
    }
}

impl Durations {
    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Pomodoro => self.pomodoro_secs,
            TimerMode::ShortBreak => self.short_break_secs,
            TimerMode::LongBreak => self.long_break_secs,
        }
    }
}

/// Outcome of a timer running out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub finished: TimerMode,
    pub next: TimerMode,
    pub pomodoros_completed: u32,
}

/// Countdown state for the current mode
#[derive(Debug, Clone)]
pub struct Timer {
    pub mode: TimerMode,
    pub is_running: bool,
    pub time_remaining: u32,
    pub pomodoros_completed: u32,
    durations: Durations,
    pomodoros_per_long_break: u32,
    /// Present only while running
    tick_handle: Option<TickHandle>,
}

impl Timer {
    pub fn new(durations: Durations, pomodoros_per_long_break: u32) -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            is_running: false,
            time_remaining: durations.pomodoro_secs,
            pomodoros_completed: 0,
            durations,
            pomodoros_per_long_break: pomodoros_per_long_break.max(1),
            tick_handle: None,
        }
    }

    pub fn pomodoros_per_long_break(&self) -> u32 {
        self.pomodoros_per_long_break
    }

    /// Full length of the current mode
    pub fn current_duration(&self) -> u32 {
        self.durations.for_mode(self.mode)
    }

    pub fn has_tick_scheduled(&self) -> bool {
        self.tick_handle.is_some()
    }

    /// Start counting down. Returns false if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running {
            return false;
        }
        self.is_running = true;
        self.tick_handle = Some(TickHandle::schedule(now));
        true
    }

    /// Stop counting down and cancel the tick (idempotent)
    pub fn pause(&mut self) {
        self.is_running = false;
        self.tick_handle = None;
    }

    /// Pause and restore the full duration of the current mode
    pub fn reset(&mut self) {
        self.pause();
        self.time_remaining = self.current_duration();
    }

    pub fn select_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Number of ticks due by `now`; zero when no tick is scheduled
    pub fn take_due_ticks(&mut self, now: Instant) -> u32 {
        match self.tick_handle.as_mut() {
            Some(handle) => handle.take_due(now),
            None => 0,
        }
    }

    /// Apply one tick. Returns true when the countdown has run out.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        // Clamped at zero: the end check below fires on the same tick
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining == 0
    }

    /// Pause and move on to the next mode after the countdown ran out.
    /// The next timer is armed but not started.
    pub fn complete(&mut self) -> Completion {
        let finished = self.mode;
        self.pause();

        let next = if finished == TimerMode::Pomodoro {
            self.pomodoros_completed += 1;
            if self.pomodoros_completed > 0
                && self.pomodoros_completed % self.pomodoros_per_long_break == 0
            {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            }
        } else {
            TimerMode::Pomodoro
        };

        self.select_mode(next);

        Completion {
            finished,
            next,
            pomodoros_completed: self.pomodoros_completed,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Durations::default(), DEFAULT_POMODOROS_PER_LONG_BREAK)
    }
}
