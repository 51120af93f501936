use super::task::Task;

/// Whole minutes left on the clock
pub fn minutes(time_remaining: u32) -> u32 {
    time_remaining / 60
}

/// Seconds left within the current minute
pub fn seconds(time_remaining: u32) -> u32 {
    time_remaining % 60
}

/// Format remaining time as "MM:SS", both fields zero padded
pub fn format_time(time_remaining: u32) -> String {
    format!("{:02}:{:02}", minutes(time_remaining), seconds(time_remaining))
}

/// Fraction of the current interval already spent (0.0 to 1.0)
pub fn progress_ratio(time_remaining: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    let remaining = time_remaining.min(duration) as f64;
    1.0 - remaining / duration as f64
}

/// One tomato per completed pomodoro in the current cycle, dots for the rest
pub fn pomodoro_tally(completed: u32, per_long_break: u32, use_emoji: bool) -> String {
    let per_cycle = per_long_break.max(1);
    let in_cycle = completed % per_cycle;
    let (done, pending) = if use_emoji { ("🍅", "·") } else { ("o", ".") };

    let mut tally = String::new();
    for i in 0..per_cycle {
        tally.push_str(if i < in_cycle { done } else { pending });
    }
    tally
}

/// Checkbox glyph for a task row
pub fn task_checkbox(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Marker shown next to the task in focus
pub fn active_marker(is_active: bool, use_emoji: bool) -> &'static str {
    match (is_active, use_emoji) {
        (true, true) => "🎯",
        (true, false) => ">",
        (false, true) => "  ",
        (false, false) => " ",
    }
}

/// Status badge for the timer
pub fn status_badge(is_running: bool) -> &'static str {
    if is_running {
        "⏱ RUNNING"
    } else {
        "⏸ PAUSED"
    }
}
