use crate::domain::{format_time, progress_ratio, SoundCue, Task, TaskList, Timer, TimerMode, UiMode};
use crate::notifications;
use crate::sound::SoundCues;
use std::time::Instant;
use tracing::{debug, info};

/// Input form state for adding tasks
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
}

/// Main application state
pub struct AppState {
    pub timer: Timer,
    pub tasks: TaskList,
    pub sound: SoundCues,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub use_emoji: bool,
    pub notify: bool,
    /// Last timer transition, shown in the timer pane
    pub last_message: Option<String>,
}

impl AppState {
    pub fn new(timer: Timer, sound: SoundCues) -> Self {
        Self {
            timer,
            tasks: TaskList::new(),
            sound,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            use_emoji: true,
            notify: true,
            last_message: None,
        }
    }

    // ---- Timer controller ----

    /// Start when paused, pause when running
    pub fn start_pause_timer(&mut self) {
        if self.timer.is_running {
            self.pause_timer();
        } else {
            self.start_timer();
        }
    }

    pub fn start_timer(&mut self) {
        self.start_timer_at(Instant::now());
    }

    /// Start the countdown with its first tick due one second after `now`
    pub fn start_timer_at(&mut self, now: Instant) {
        if self.timer.is_running {
            return;
        }
        self.last_message = None;

        if self.timer.mode == TimerMode::Pomodoro {
            self.sound.play(SoundCue::Start);
        }

        self.timer.start(now);
        info!(mode = self.timer.mode.name(), remaining = self.timer.time_remaining, "timer started");
    }

    pub fn pause_timer(&mut self) {
        if self.timer.is_running {
            info!(remaining = self.timer.time_remaining, "timer paused");
        }
        self.timer.pause();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.last_message = None;
        debug!(mode = self.timer.mode.name(), "timer reset");
    }

    pub fn select_mode(&mut self, mode: TimerMode) {
        self.timer.select_mode(mode);
        self.last_message = None;
        info!(mode = mode.name(), "mode selected");
    }

    pub fn toggle_mute(&mut self) {
        self.sound.toggle_mute();
        info!(muted = self.sound.muted, "mute toggled");
    }

    /// Apply every tick due by `now`. Stops early once the timer runs out
    /// so leftover ticks never leak into the next mode.
    pub fn poll_timer(&mut self, now: Instant) {
        let due = self.timer.take_due_ticks(now);
        if due > 1 {
            debug!(due, "catching up on ticks");
        }
        for _ in 0..due {
            self.tick();
            if !self.timer.is_running {
                break;
            }
        }
    }

    /// One tick: decrement and handle expiry
    pub fn tick(&mut self) {
        if self.timer.tick() {
            self.handle_timer_end();
        }
    }

    fn handle_timer_end(&mut self) {
        self.sound.play(SoundCue::End);
        let completion = self.timer.complete();

        info!(
            finished = completion.finished.name(),
            next = completion.next.name(),
            pomodoros = completion.pomodoros_completed,
            "timer finished"
        );

        if self.notify {
            notifications::notify_timer_finished(completion.finished, completion.next);
        }
        self.last_message = Some(notifications::timer_finished_message(
            completion.finished,
            completion.next,
        ));
    }

    // ---- Derived display state ----

    pub fn minutes(&self) -> u32 {
        crate::domain::minutes(self.timer.time_remaining)
    }

    pub fn seconds(&self) -> u32 {
        crate::domain::seconds(self.timer.time_remaining)
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.timer.time_remaining)
    }

    pub fn active_task(&self) -> Option<&Task> {
        self.tasks.active_task()
    }

    /// Fraction of the current interval already spent
    pub fn progress(&self) -> f64 {
        progress_ratio(self.timer.time_remaining, self.timer.current_duration())
    }

    // ---- Task list ----

    /// Add a task from free text. Empty text is ignored.
    pub fn add_task(&mut self, text: &str) -> Option<i64> {
        let now_millis = chrono::Utc::now().timestamp_millis();
        let id = self.tasks.add(text, now_millis)?;

        // Clear the input field
        if let Some(form) = &mut self.input_form {
            form.text.clear();
        }

        info!(id, total = self.tasks.len(), "task added");
        Some(id)
    }

    pub fn toggle_task_completion(&mut self, id: i64) {
        if self.tasks.toggle_completion(id) {
            debug!(id, "task completion toggled");
        }
    }

    pub fn delete_task(&mut self, id: i64) {
        if self.tasks.delete(id).is_some() {
            info!(id, remaining = self.tasks.len(), "task deleted");
            self.clamp_selection();
        }
    }

    pub fn set_active_task(&mut self, id: i64) {
        self.tasks.set_active(id);
        debug!(id, "active task set");
    }

    // ---- Selection ----

    /// Get the id of the selected task
    pub fn selected_task_id(&self) -> Option<i64> {
        self.tasks.get(self.selected_index).map(|t| t.id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task_completion(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    pub fn activate_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.set_active_task(id);
        }
    }

    // ---- Input form ----

    /// Open the add-task form
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.text.pop();
        }
    }

    /// Submit the form. Blank text keeps the form open.
    pub fn submit_input_form(&mut self) {
        let text = match &self.input_form {
            Some(form) => form.text.clone(),
            None => return,
        };

        if self.add_task(&text).is_some() {
            self.selected_index = self.tasks.len() - 1;
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
