//! Portfolio Splash Entry Point
//!
//! Launches the weather-driven intro gate in the terminal, then the portfolio.
//!
//! Usage:
//!   portfolio-splash [OPTIONS]
//!
//! Options:
//!   --config <PATH>         Config file (default: ~/.config/portfolio-splash/splash.toml)
//!   --offline               Skip the network and use fixed weather
//!   --weather-code <CODE>   WMO code for offline weather
//!   --wind <KMH>            Wind speed for offline weather
//!   --seed <SEED>           Seed the scene randomness
//!   --fetch-timeout <SECS>  Give up on the weather fetch after SECS

use std::fs::{self, File};
use std::io::{self, IsTerminal};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use splash_core::{
    load_config, load_config_from_path, ConfigOverrides, OpenMeteoSource, SplashConfig, StaticSource,
    WeatherSnapshot, WeatherSource,
};
use splash_tui::App;

/// Default log filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "splash_tui=info,splash_core=info";

#[derive(Parser, Debug)]
#[command(name = "portfolio-splash")]
#[command(author, version, about = "Weather-driven intro gate for the portfolio", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "SPLASH_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the weather fetch and use fixed conditions
    #[arg(long)]
    offline: bool,

    /// WMO weather code for offline conditions
    #[arg(long, value_name = "CODE", default_value_t = 0)]
    weather_code: i32,

    /// Wind speed in km/h for offline conditions
    #[arg(long, value_name = "KMH", default_value_t = 10)]
    wind: i32,

    /// Seed for the scene's randomness
    #[arg(long, env = "SPLASH_SEED")]
    seed: Option<u64>,

    /// Give up on the weather fetch after this many seconds
    #[arg(long, env = "SPLASH_FETCH_TIMEOUT_SECS", value_name = "SECS")]
    fetch_timeout: Option<u64>,

    /// Frame interval in milliseconds
    #[arg(long, value_name = "MS")]
    frame_ms: Option<u64>,

    /// Log file (default: state directory)
    #[arg(long, env = "SPLASH_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to a file; stdout belongs to the terminal UI
    let log_path = args.log_file.clone().or_else(default_log_path);
    if let Some(path) = &log_path {
        init_logging(path)?;
    }

    let config = build_config(&args)?;
    let source = build_source(&args, &config);

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: portfolio-splash requires a terminal (TTY)");
        eprintln!();
        eprintln!("Run it interactively, or over SSH with -t.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, config, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: SplashConfig,
    source: Arc<dyn WeatherSource>,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);

    let mut app = App::new(config, source, area);
    app.run(terminal).await
}

fn build_config(args: &Args) -> anyhow::Result<SplashConfig> {
    let loaded = match &args.config {
        Some(path) => load_config_from_path(Some(path)),
        None => load_config(),
    };
    let mut config = loaded.context("Failed to load configuration")?;

    let mut overrides = ConfigOverrides::new();
    if let Some(seed) = args.seed {
        overrides = overrides.with_seed(seed);
    }
    if let Some(ms) = args.frame_ms {
        overrides = overrides.with_frame_interval_ms(ms);
    }
    if let Some(secs) = args.fetch_timeout {
        overrides = overrides.with_fetch_timeout_secs(secs);
    }
    overrides.apply(&mut config);

    config.validate().context("Invalid configuration")?;
    tracing::info!(source = ?config.source(), "Configuration loaded");
    Ok(config)
}

fn build_source(args: &Args, config: &SplashConfig) -> Arc<dyn WeatherSource> {
    if args.offline {
        let snapshot = WeatherSnapshot::new(
            WeatherSnapshot::FALLBACK.temperature_c,
            args.wind,
            args.weather_code,
            true,
        );
        tracing::info!(code = args.weather_code, wind_kmh = args.wind, "Offline weather");
        Arc::new(StaticSource::new(snapshot))
    } else {
        Arc::new(OpenMeteoSource::from_config(&config.weather))
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("portfolio-splash").join("splash.log"))
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .init();

    Ok(())
}
