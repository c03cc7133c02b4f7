use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Banking TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    no_mouse: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod config;
mod handlers;
mod logic;
mod model;
mod ui;
mod utils;

use banktui::ActionKind;
use config::Config;
use model::Model;
use ui::icons::{IconMode, IconRenderer, IconTheme};
use ui::measure::Geometry;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: Model,

    /// Resolves symbolic icon ids to glyphs
    pub icon_renderer: IconRenderer,

    /// Element geometry from the last render pass; handlers measure and
    /// hit-test against it
    pub geometry: Geometry,
}

impl App {
    fn new(config: &Config) -> Self {
        // Parse icon mode from config
        let icon_mode = match config.icon_mode.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::NerdFont, // Default to nerd font
        };
        let icon_renderer = IconRenderer::new(icon_mode, IconTheme::default());

        App {
            model: Model::new(),
            icon_renderer,
            geometry: Geometry::new(),
        }
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/banktui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("banktui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config anywhere - run on defaults
    Ok(None)
}

/// Load configuration, falling back to defaults when no file exists
fn load_config(cli_path: Option<String>) -> Result<Config> {
    match get_config_path(cli_path)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)?;
            let config = serde_yaml::from_str(&config_str)?;
            Ok(config)
        }
        None => {
            log_debug("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let mut config = load_config(args.config)?;

    // Override config with CLI flags
    if args.no_mouse {
        config.mouse = false;
    }

    // Initialize app
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, config.mouse);

    // Cleanup terminal
    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mouse_enabled: bool,
) -> Result<()> {
    loop {
        // Always render - the view is re-derived from the model
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_quit {
            break;
        }

        // The entrance tween needs frames while it runs; otherwise idle
        // at a slow poll to keep CPU usage down
        let animating = app
            .model
            .dropdown
            .as_ref()
            .map(|dd| dd.is_animating())
            .unwrap_or(false);
        let timeout = if animating {
            Duration::from_millis(33)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) if mouse_enabled => handlers::handle_mouse(app, mouse),
                // Geometry is re-recorded on the next draw
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}
