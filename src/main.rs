//! Raidplanner - Entry Point
//!
//! Loads configuration and data, sets up the terminal and runs the UI loop.
//! `raidplanner --export-data [DIR]` writes the built-in data files instead.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use raidplanner::analysis::GeminiClient;
use raidplanner::config::Config;
use raidplanner::data::{export_default_data, DataManager};
use raidplanner::i18n::Translator;
use raidplanner::session::{Screen, Session};
use raidplanner::ui::App;

/// Redraw rate while idle; analysis results arrive between frames
const TARGET_FPS: u64 = 30;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Raidplanner v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        if arg == "--export-data" {
            let dir = args.next().map(PathBuf::from).unwrap_or_else(|| config.data_dir.clone());
            export_default_data(&dir).with_context(|| format!("exporting data to {:?}", dir))?;
            println!("Wrote default data files to {}", dir.display());
            return Ok(());
        }
        anyhow::bail!("unknown argument '{}' (expected --export-data [DIR])", arg);
    }

    let data = DataManager::load(&config.data_dir);
    let translator = match &config.locale_dir {
        Some(dir) => Translator::from_dir(dir, config.language)
            .with_context(|| format!("loading translations from {:?}", dir))?,
        None => Translator::bundled(config.language).context("loading bundled translations")?,
    };
    let analyst = GeminiClient::new(&config.model, config.api_key.clone())
        .context("creating analysis client")?;
    if config.api_key.is_none() {
        log::warn!("No API key configured, build analysis will be unavailable");
    }

    let mut session = Session::new(&config, data, translator, Arc::new(analyst));
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut session);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Raidplanner shut down cleanly");
    result
}

/// Log to a file so output does not interfere with the TUI
fn init_logging() {
    let builder = || env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("raidplanner.log")
    {
        Ok(file) => {
            builder().target(env_logger::Target::Pipe(Box::new(file))).init();
        }
        Err(_) => {
            builder().target(env_logger::Target::Pipe(Box::new(io::sink()))).init();
        }
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    session: &mut Session,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        terminal.draw(|frame| {
            app.render(frame, session);
        })?;

        let timeout = FRAME_TIME.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key, session) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }

        if matches!(session.screen(), Screen::Quit) {
            break;
        }
    }

    Ok(())
}
