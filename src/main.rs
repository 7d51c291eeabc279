//! user-dashboard binary entry point.
//!
//! Parses flags, starts logging and the fetch worker, runs the TUI event
//! loop, and restores the terminal state on exit.
//!
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use user_dashboard::Result;
use user_dashboard::app::keymap::Keymap;
use user_dashboard::app::worker::FetchWorker;
use user_dashboard::app::{self, AppState, Theme};
use user_dashboard::config::Args;
use user_dashboard::source::RandomUserClient;

/// Send tracing output to the log file; the terminal belongs to the TUI.
fn init_logging(args: &Args) -> Result<()> {
    let path = args.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    info!(base_url = %args.base_url, "starting user-dashboard");

    let client = RandomUserClient::new(&args.base_url)?;
    let worker = FetchWorker::spawn(Arc::new(client))?;
    let theme = Theme::load_or_init(&args.theme_path());
    let keymap = Keymap::load_or_init(&args.keybinds_path());
    let mut app = AppState::new(theme, keymap);

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut app, &worker);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
