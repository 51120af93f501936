mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod sound;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{config_file, init_config_dir, load_config, log_file, save_config, sounds_dir, AppConfig};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Timer;
use ratatui::{backend::CrosstermBackend, Terminal};
use sound::{SoundCues, SystemPlayer};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A terminal Pomodoro timer with a focus task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with sound cues muted
    #[arg(long)]
    mute: bool,

    /// Config file path. Defaults to ~/.config/tomato/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug detail to the log file
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file and create the sounds directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => config_file()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            let dir = init_config_dir()?;
            if config_path.exists() {
                anyhow::bail!("Config file already exists: {}", config_path.display());
            }
            save_config(&config_path, &AppConfig::default())?;
            println!("Wrote default config: {}", config_path.display());
            println!();
            println!("Place start.mp3 and finish.mp3 in {}", dir.join("sounds").display());
            println!("to enable sound cues, or point start_cue/end_cue at your own files.");
            Ok(())
        }
        None => {
            let log_path = log_file()?;
            logging::init_logging(&log_path, cli.verbose)?;

            let config = load_config(&config_path)?;
            run_tui(config, cli.mute)
        }
    }
}

fn run_tui(config: AppConfig, mute: bool) -> Result<()> {
    let (start_cue, end_cue) = config.cue_assets(&sounds_dir()?);
    info!(
        start = %start_cue.path.display(),
        end = %end_cue.path.display(),
        "session started"
    );

    let player = SystemPlayer::new(start_cue, end_cue);
    let sound = SoundCues::new(Box::new(player), config.muted || mute);
    let timer = Timer::new(config.durations, config.pomodoros_per_long_break);
    let mut app = AppState::new(timer, sound);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        pomodoros = app.timer.pomodoros_completed,
        tasks = app.tasks.len(),
        "session ended"
    );

    if let Err(err) = &result {
        error!(error = %err, "session aborted");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the countdown keeps moving
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        // Deliver due countdown ticks
        app.poll_timer(Instant::now());
        app.sound.poll();
    }
}
