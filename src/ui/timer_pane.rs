use crate::app::AppState;
use crate::domain::{active_marker, pomodoro_tally, status_badge, TimerMode};
use crate::ui::styles::{
    active_style, border_style, clock_style, default_style, gauge_style, hint_style, mode_color,
    paused_style, running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Mode selector line, current mode highlighted
fn mode_tabs(current: TimerMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, mode) in TimerMode::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let label = format!("[{}] {}", idx + 1, mode.name());
        if *mode == current {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(mode_color(*mode))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::styled(label, hint_style()));
        }
    }
    Line::from(spans)
}

/// Status line: running badge, tally, mute indicator
fn status_line(app: &AppState) -> Line<'static> {
    let timer = &app.timer;
    let badge_style = if timer.is_running {
        running_style()
    } else {
        paused_style()
    };
    let sound = if app.sound.muted { "🔇 muted" } else { "🔊 sound" };

    Line::from(vec![
        Span::styled(status_badge(timer.is_running).to_string(), badge_style),
        Span::raw("   "),
        Span::raw(pomodoro_tally(
            timer.pomodoros_completed,
            timer.pomodoros_per_long_break(),
            app.use_emoji,
        )),
        Span::raw(format!("  {} done   ", timer.pomodoros_completed)),
        Span::styled(sound.to_string(), hint_style()),
    ])
}

/// "Focus: <task>" or a hint when nothing is active
fn focus_line(app: &AppState) -> Line<'static> {
    match app.active_task() {
        Some(task) => Line::from(vec![
            Span::raw(format!("{} Focus: ", active_marker(true, app.use_emoji))),
            Span::styled(task.text.clone(), active_style()),
        ]),
        None => Line::from(Span::styled(
            "No active task. Add one with 'a'".to_string(),
            hint_style(),
        )),
    }
}

/// Render the timer pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mode = app.timer.mode;
    let title = format!(" {} {} ", mode.symbol(), mode.name());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode tabs
            Constraint::Length(1),
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Prompt / last transition
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Status
            Constraint::Length(1), // Focus
            Constraint::Min(0),
        ])
        .split(block.inner(area));

    f.render_widget(block, area);

    f.render_widget(
        Paragraph::new(mode_tabs(mode)).alignment(Alignment::Center),
        chunks[0],
    );

    let clock = Paragraph::new(Line::from(Span::styled(
        format!("⏳ {}", app.formatted_time()),
        clock_style(mode),
    )))
    .alignment(Alignment::Center);
    f.render_widget(clock, chunks[2]);

    let prompt = app
        .last_message
        .clone()
        .unwrap_or_else(|| mode.prompt().to_string());
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(prompt, default_style())))
            .alignment(Alignment::Center),
        chunks[3],
    );

    let percent = (app.progress() * 100.0).round().clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .gauge_style(gauge_style(mode))
        .percent(percent);
    f.render_widget(gauge, chunks[4]);

    f.render_widget(
        Paragraph::new(status_line(app)).alignment(Alignment::Center),
        chunks[5],
    );
    f.render_widget(
        Paragraph::new(focus_line(app)).alignment(Alignment::Center),
        chunks[6],
    );
}
