use crate::app::AppState;
use crate::domain::{active_marker, task_checkbox, Task};
use crate::ui::styles::{
    active_style, border_style, default_style, done_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(
        " Tasks ({}/{} done) ",
        app.tasks.completed_count(),
        app.tasks.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  Nothing here yet. Press 'a' to add a task.",
            hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let active_id = app.tasks.active_task_id;
    let items: Vec<ListItem> = app
        .tasks
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, active_id == Some(task.id), app.use_emoji);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    // The selection drives the scroll offset so it always stays in view
    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(app.tasks.len() - 1)));

    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

/// Create a single line for a task
/// Format: 🎯 [ ] Write proposal
fn create_task_line(task: &Task, is_active: bool, use_emoji: bool) -> Line<'static> {
    let text_style = if task.completed {
        done_style()
    } else if is_active {
        active_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::raw(format!(" {} ", active_marker(is_active, use_emoji))),
        Span::raw(format!("{} ", task_checkbox(task))),
        Span::styled(task.text.clone(), text_style),
    ])
}
