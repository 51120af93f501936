//! Cross-platform notification support
//! Currently only implements macOS notifications

use crate::domain::TimerMode;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Notification text for a finished timer
pub fn timer_finished_message(finished: TimerMode, next: TimerMode) -> String {
    format!(
        "{} {} finished. Up next: {}",
        finished.symbol(),
        finished.name(),
        next.name()
    )
}

/// Send a notification when a timer runs out
pub fn notify_timer_finished(finished: TimerMode, next: TimerMode) {
    let message = timer_finished_message(finished, next);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Tomato""#,
            message.replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = message;
    }
}
