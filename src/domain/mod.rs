pub mod enums;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{SoundCue, TimerMode, UiMode};
pub use task::{Task, TaskList};
pub use timer::{Durations, Timer, DEFAULT_POMODOROS_PER_LONG_BREAK};
pub use views::{
    active_marker, format_time, minutes, pomodoro_tally, progress_ratio, seconds, status_badge,
    task_checkbox,
};
