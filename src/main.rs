//! Folio TUI - terminal portfolio with a contact form
//!
//! A Ratatui-based TUI that presents profile, skills, experience and
//! projects, and delivers contact messages through EmailJS.

mod app;
mod config;
mod content;
mod gateway;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::{GatewayMode, PortfolioConfig};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event poll interval
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "folio-tui", version, about)]
struct Cli {
    /// Use the simulated gateway instead of EmailJS
    #[arg(long)]
    simulate: bool,
}

/// Open the log file in the platform data directory
fn open_log_file() -> Option<File> {
    let dirs = ProjectDirs::from("dev", "folio", "folio-tui")?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("folio-tui.log"))
        .ok()
}

/// Initialize logging. The terminal is in alternate-screen mode, so logs go
/// to a file when one can be opened.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "folio_tui=info".into());

    match open_log_file() {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Load configuration and pick the gateway
    let mut config = PortfolioConfig::load();
    if cli.simulate {
        config.gateway = GatewayMode::Simulated;
    }
    let gateway = gateway::from_config(&config)?;
    info!("Starting folio-tui with {} gateway", gateway.name());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(gateway);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Settle finished deliveries and expire banners before drawing
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            info!("Quit requested");
            return Ok(());
        }
    }
}
