mod animation;
mod app;
mod config;
mod error;
mod event;
mod ui;

use std::io;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::app::App;
use crate::config::CliArgs;
use crate::error::ChainlineError;
use crate::event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        print!("{}", config::default_config_toml());
        return Ok(());
    }

    // Initialize color-eyre with a panic hook that restores the terminal
    install_panic_hook();

    // Config must be valid before any terminal state is touched
    let config = config::load(&cli)?;

    init_logging(&cli.log, &config.general.log_level);
    info!("chainline starting");

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| ChainlineError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.general.mouse_support {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create event handler and app
    let mut event_handler = EventHandler::new();
    let mut app = App::new(&config, event_handler.sender())?;

    // ── Main event loop ───────────────────────────────────────────────
    // Draw first, then advance: each tick's frame shows the state left
    // by the previous tick.
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Some(event) = event_handler.next().await {
            app.handle_event(event);
            if app.should_quit {
                break;
            }
        } else {
            break;
        }
    }

    // Restore terminal
    app.ticker.stop();
    event_handler.stop();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("chainline exiting");
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        // Call default handler
        default_hook(panic_info);
    }));
    color_eyre::install().ok();
}

/// Initialize tracing to a log file
fn init_logging(log_path: &Option<std::path::PathBuf>, level: &str) {
    use tracing_subscriber::EnvFilter;

    if let Some(path) = log_path {
        let file = std::fs::File::create(path).expect("Failed to create log file");
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        // No logging if no log path specified (can't log to stdout in a TUI)
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .with_writer(io::sink)
            .init();
    }
}
