//! CyberWatch - Terminal security operations center dashboard
//!
//! Usage:
//!   cyberwatch [OPTIONS]
//!
//! Examples:
//!   cyberwatch                              # Start on the event logs
//!   cyberwatch --section prevention         # Start on threat prevention
//!   cyberwatch --snapshot --width 160       # Print one frame and exit

use anyhow::{Context, Result};
use clap::Parser;
use cyberwatch_core::{
    tui::{EventLoop, TerminalManager, TuiEvent},
    App, DashboardConfig, SectionId,
};
use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Dashboard CLI arguments
#[derive(Parser, Debug)]
#[command(name = "cyberwatch")]
#[command(about = "Terminal security operations center dashboard")]
#[command(version)]
struct Args {
    /// Config file (defaults to <config dir>/cyberwatch/config.toml)
    #[arg(long, env = "CYBERWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Section to open first (logs, alerts, analysis, reasoning, detection,
    /// prevention, reports, feedback)
    #[arg(long)]
    section: Option<String>,

    /// Input poll interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log file (defaults to cyberwatch.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Render one frame to stdout and exit
    #[arg(long)]
    snapshot: bool,

    /// Snapshot width in columns
    #[arg(long, default_value = "120")]
    width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value = "40")]
    height: u16,
}

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cyberwatch={},cyberwatch_core={}",
            level.as_str().to_lowercase(),
            level.as_str().to_lowercase()
        ))
    });

    // The terminal belongs to the UI, so logs always go to a file
    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("cyberwatch.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn load_config(args: &Args) -> Result<DashboardConfig> {
    let path = args.config.clone().unwrap_or_else(DashboardConfig::default_path);
    let mut config = DashboardConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(section) = &args.section {
        config.dashboard.initial_section = section.clone();
    }
    if let Some(tick_rate) = args.tick_rate {
        config.dashboard.tick_rate_ms = tick_rate;
    }
    config.validate().context("Invalid configuration")?;

    if config.initial_section().id() != config.dashboard.initial_section {
        info!(
            "Unknown section '{}', opening {}",
            config.dashboard.initial_section,
            SectionId::default().id()
        );
    }
    Ok(config)
}

fn run(app: &mut App, tick_rate: u64) -> Result<()> {
    let mut manager = TerminalManager::new().context("Failed to set up terminal")?;
    manager.clear()?;
    let events = EventLoop::new(tick_rate);

    loop {
        manager.terminal_mut().draw(|f| app.render(f))?;

        match events.poll_event()? {
            TuiEvent::Quit => break,
            TuiEvent::Key(key) => {
                if app.handle_key(key) {
                    break;
                }
            }
            TuiEvent::Resize(w, h) => debug!("Terminal resized to {}x{}", w, h),
            TuiEvent::Tick => {}
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    info!("CyberWatch v{} starting", env!("CARGO_PKG_VERSION"));
    let config = load_config(&args)?;
    debug!("Configuration: {:?}", config);

    let mut app = App::new(&config);

    if args.snapshot {
        let frame = app
            .snapshot(args.width, args.height)
            .context("Failed to render snapshot")?;
        println!("{}", frame);
        return Ok(());
    }

    run(&mut app, config.dashboard.tick_rate_ms)?;

    info!("CyberWatch exiting cleanly");
    Ok(())
}
