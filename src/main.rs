use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crm_settings::{
    admin::{AdminBackend, InertBackend},
    app::{App, Popup},
    config::AppConfig,
    tabs::{self, Tab},
    theme::Theme,
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "crm-settings")]
#[command(version = "0.1.0")]
#[command(about = "Database and group settings panels for the CRM admin console")]
struct Args {
    /// Tab to open on startup (overrides the config file)
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Print the layout of both panels as JSON and exit
    #[arg(short, long)]
    describe: bool,

    /// Render a single frame as plain text and exit
    #[arg(short, long)]
    snapshot: bool,

    /// Snapshot width in columns
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value_t = 30)]
    height: u16,
}

impl Args {
    /// False when the run only prints to stdout and exits
    fn interactive(&self) -> bool {
        !self.describe && !self.snapshot
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.interactive());

    // Handle CLI-only commands
    if args.describe {
        println!("{}", serde_json::to_string_pretty(&tabs::describe())?);
        return Ok(());
    }

    // Headless runs never touch the config directory
    let config = AppConfig::load(args.interactive());
    ui::init_theme(Theme::from_config(&config.theme));
    let tab = args.tab.unwrap_or(config.default_tab);

    if args.snapshot {
        return print_snapshot(tab, args.width, args.height);
    }

    // Run TUI
    run_tui(App::new(tab, InertBackend)).await
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(interactive: bool) {
    // No log file if the cache directory is unavailable
    let file_appender = interactive.then(log_dir).flatten().and_then(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("crm-settings")
            .filename_suffix("log")
            .build(dir)
            .ok()
    });

    let stderr_layer = (!interactive).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));
    let file_layer = file_appender.map(|appender| {
        tracing_subscriber::fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("crm-settings"))
}

fn print_snapshot(tab: Tab, width: u16, height: u16) -> Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Snapshot size must be at least 1x1 (got {}x{})", width, height);
    }

    let app = App::new(tab, InertBackend);
    println!("{}", ui::render_to_text(width, height, |f| ui::draw(f, &app))?);
    Ok(())
}

async fn run_tui<B: AdminBackend>(mut app: App<B>) -> Result<()> {
    tracing::info!("Starting settings UI on {} tab", app.tab.label());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Settings UI closed");
    result
}

async fn run_app<B: AdminBackend>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<B>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {
                            // Handle key and catch any errors to prevent crashes
                            if let Err(e) = app.handle_key(key).await {
                                tracing::warn!("Action failed: {}", e);
                                app.set_status(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        app.tick();
    }
}
