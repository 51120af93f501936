/// Timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerMode {
    /// Focused work interval
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "Pomodoro",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    /// Get the emoji symbol for this mode
    pub fn symbol(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "🍅",
            TimerMode::ShortBreak => "☕",
            TimerMode::LongBreak => "🌿",
        }
    }

    /// Phrase shown under the clock
    pub fn prompt(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "Time to focus",
            TimerMode::ShortBreak => "Stretch and breathe",
            TimerMode::LongBreak => "Step away for a while",
        }
    }

    /// Get all modes in selector order
    pub fn all() -> &'static [TimerMode] {
        &[TimerMode::Pomodoro, TimerMode::ShortBreak, TimerMode::LongBreak]
    }
}

/// One of the two fixed sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Played when a work interval starts
    Start,
    /// Played when any timer runs out
    End,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Start => "start",
            SoundCue::End => "end",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}
