use crate::app::AppState;
use crate::domain::{TimerMode, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        // Timer controls
        KeyCode::Char(' ') => app.start_pause_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char('1') => app.select_mode(TimerMode::Pomodoro),
        KeyCode::Char('2') => app.select_mode(TimerMode::ShortBreak),
        KeyCode::Char('3') => app.select_mode(TimerMode::LongBreak),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_mute(),

        // Task navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Task actions
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_selected(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while the add-task form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Submit form
        KeyCode::Enter => app.submit_input_form(),

        // Cancel form
        KeyCode::Esc => app.cancel_input_form(),

        KeyCode::Backspace => app.input_form_backspace(),

        // Add character
        KeyCode::Char(c) => app.input_form_add_char(c),

        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timer;
    use crate::sound::testing::RecordingPlayer;
    use crate::sound::SoundCues;

    fn create_test_app() -> AppState {
        let sound = SoundCues::new(Box::new(RecordingPlayer::default()), false);
        let mut app = AppState::new(Timer::default(), sound);
        app.notify = false;
        app.add_task("Test task");
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.add_task("Task 2");

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_handle_timer_keys() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.timer.is_running);

        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.timer.mode, TimerMode::LongBreak);
        assert_eq!(app.timer.time_remaining, 900);
        assert!(!app.timer.is_running);

        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.timer.mode, TimerMode::ShortBreak);

        handle_key(&mut app, key(KeyCode::Char('m')));
        assert!(app.sound.muted);
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        // Press 'a' to open form
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        // Typing 'q' in the form does not quit
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))));
        handle_key(&mut app, key(KeyCode::Backspace));

        handle_key(&mut app, key(KeyCode::Char('N')));
        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_key(&mut app, key(KeyCode::Char('w')));

        // Submit with Enter
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks.len(), initial_count + 1);
        assert_eq!(app.tasks.tasks[initial_count].text, "New");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_handle_task_actions() {
        let mut app = create_test_app();
        app.add_task("Second");

        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.active_task().unwrap().text, "Second");

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(app.tasks.tasks[1].completed);

        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.tasks.len(), 1);
        assert!(app.active_task().is_none());
    }

    #[test]
    fn test_handle_delete_key() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(app.tasks.len(), initial_count - 1);
    }
}
