use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use torus_snake::config::{GridSize, TICK_INTERVAL_MS};
use torus_snake::frame;
use torus_snake::game::{GameState, Tick};
use torus_snake::input::{InputPoller, LatestKey};
use torus_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort, clear_screen};
use torus_snake::{Error, Result};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity, used together with --log-file.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    install_panic_hook();

    let score = run(&cli)?;
    info!("game over, final score {score}");

    clear_screen()?;
    println!("You score: {score}");

    let mut acknowledgement = String::new();
    io::stdin().read_line(&mut acknowledgement)?;
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    if let Err(error) = WriteLogger::init(cli.log_level.into(), Config::default(), file) {
        eprintln!("Failed to initialize logging: {error}");
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<usize> {
    let mut session = TerminalSession::enter()?;

    let (width, height) = session.size()?;
    let bounds = GridSize::non_empty(width, height).ok_or(Error::EmptyTerminal { width, height })?;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };

    let latest = LatestKey::default();
    let poller = InputPoller::spawn(latest.clone())?;

    let outcome = play(&mut session, &mut state, &latest);
    poller.stop()?;

    outcome
}

fn play(session: &mut TerminalSession, state: &mut GameState, latest: &LatestKey) -> Result<usize> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

    loop {
        let (width, height) = session.size()?;
        let Some(bounds) = GridSize::non_empty(width, height) else {
            warn!("terminal reports {width}x{height}, skipping tick");
            thread::sleep(tick_interval);
            continue;
        };

        let input = latest.sample()?;
        match state.tick(bounds, input) {
            Tick::Frame(buffer) => frame::render(&buffer, session.writer())?,
            Tick::GameOver { score } => return Ok(score),
        }

        thread::sleep(tick_interval);
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
