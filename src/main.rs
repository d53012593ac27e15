//! Terminal typing trainer (default binary).
//!
//! Words scroll in from the right; type each word's leading character before
//! it reaches the laser. Ctrl-C ends the session.
//!
//! Environment:
//! - `TYPOS_SEED`: fixed RNG seed (default: derived from the clock and pid)
//! - `TYPOS_LOG_PATH`: write logs to this file instead of stderr
//! - `TYPOS_START_DELAY`, `TYPOS_DELAY_DECAY`, `TYPOS_SPEED_THRESHOLD`,
//!   `TYPOS_LASER_MOVE_THRESHOLD`, `TYPOS_LASER_COLUMN`: tuning overrides

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use tui_typos::core::{GameState, MonotonicClock, Session, SessionEnd, WordSource};
use tui_typos::input::TerminalKeys;
use tui_typos::term::{Starfield, TerminalRenderer, TerminalSink, TyposView, Viewport};
use tui_typos::types::{GameConfig, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use tui_typos::words::{self, LoadOptions, DEFAULT_DICT_DIR};
use tui_typos::BANNER;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tui-typos", about, before_help = BANNER, disable_version_flag = true)]
struct Cli {
    /// Select a file with words to use (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Only lowercase words
    #[arg(short = 'l', long = "lowercase")]
    lowercase: bool,

    /// Show version
    #[arg(short = 'V', long = "version")]
    version: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => err.exit(),
        Err(err) => {
            let _ = err.print();
            let _ = Cli::command().print_help();
            std::process::exit(1);
        }
    };

    if cli.version {
        println!("{BANNER}");
        return Ok(());
    }

    init_logging()?;

    let (width, height) =
        crossterm::terminal::size().unwrap_or((DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    let config = GameConfig::for_window(width, height).from_env_over();
    config.validate().context("cannot lay out the game in this terminal")?;

    let source = load_words(&cli, &config)?;
    let seed = seed_from_env_or_clock();
    log::info!("{} words loaded, seed {}", source.len(), seed);

    let state = GameState::new(config, source, seed)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, state, seed));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::warn!("failed to restore terminal: {e:#}");
    }

    let end = result.inspect_err(|e| log::error!("{e:#}"))?;
    log::info!(
        "session over: {} points, {} clean words",
        end.score,
        end.completed_words
    );
    println!("{BANNER}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, state: GameState, seed: u64) -> Result<SessionEnd> {
    let viewport = Viewport::from(state.config());
    // Separate stream from the word picks so the star layout never shifts them.
    let mut star_rng = Pcg32::seed_from_u64(seed ^ 0x5354_4152);
    let view = TyposView::new(viewport, Starfield::random(&mut star_rng, viewport), BANNER);

    let mut sink = TerminalSink::new(term, view);
    let mut keys = TerminalKeys::new();
    let mut session = Session::new(state, MonotonicClock::new());

    let end = session
        .run(&mut keys, &mut sink)
        .context("terminal I/O failed")?;
    Ok(end)
}

fn load_words(cli: &Cli, config: &GameConfig) -> Result<WordSource> {
    let paths = if cli.files.is_empty() {
        words::default_word_files(Path::new(DEFAULT_DICT_DIR))?
    } else {
        cli.files.clone()
    };

    let options = LoadOptions {
        lowercase: cli.lowercase,
        max_len: config.window_width as usize,
    };
    let list = words::load(&paths, &options)?;
    Ok(WordSource::new(list)?)
}

fn init_logging() -> Result<()> {
    let log_path = env::var("TYPOS_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) });

    // Stderr shares the screen with the game: keep it quiet unless asked.
    let default_filter = if log_path.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_path {
        let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// `TYPOS_SEED` if set and valid, otherwise clock time mixed with the pid.
fn seed_from_env_or_clock() -> u64 {
    if let Some(seed) = env::var("TYPOS_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
    {
        return seed;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    nanos ^ (u64::from(std::process::id()) << 32)
}
