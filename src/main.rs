//! Terminal runner (default binary).
//!
//! Feeds key presses and fixed-interval ticks, one at a time, into the
//! [`GameState`] reducer and draws the resulting board as text.

mod view;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use minofall::core::{GameConfig, GameState};
use minofall::input::{handle_key_event, should_quit};
use minofall::types::{GameEvent, TICK_MS};

use view::TerminalView;

/// Falling-block puzzle game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "minofall",
    version,
    about = "Falling-block puzzle game in the terminal.",
    long_about = "Falling-block puzzle game in the terminal.\n\n\
        CONTROLS:\n  Left/Right  Move    Up   Rotate CW   Down  Rotate CCW\n  \
        Space       Move down one row    P    Pause       R     Restart\n  \
        Q / Esc     Quit\n\n\
        A JSON file given with --config may set board_width, board_height, \
        move_period_ms, seed and start_paused; flags override it."
)]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Gravity interval in milliseconds
    #[arg(long)]
    move_period_ms: Option<u32>,

    /// Seed for piece selection
    #[arg(long)]
    seed: Option<u32>,

    /// Start paused (press P to begin)
    #[arg(long)]
    start_paused: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(period) = self.move_period_ms {
            config.move_period_ms = period;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.start_paused {
            config.start_paused = true;
        }
        Ok(config)
    }
}

fn init_logging(args: &Args) -> Result<()> {
    // Logging to the terminal would draw over the board.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .try_init()
        .context("installing log subscriber")?;

    info!("logging initialized at level {level}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.game_config()?;
    info!(?config, "starting");
    let state = GameState::new(config).context("invalid game configuration")?;

    let mut view = TerminalView::new();
    view.enter()?;

    let result = run(&mut view, state);

    // Always try to restore terminal state.
    let _ = view.exit();

    let state = result?;
    info!(score = state.score(), lines = state.lines(), "quit");
    println!("score: {}  lines: {}", state.score(), state.lines());
    Ok(())
}

fn run(view: &mut TerminalView, mut state: GameState) -> Result<GameState> {
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        view.draw(&state)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(state);
                    }
                    if let Some(action) = handle_key_event(key) {
                        state = state.step(action.into());
                    }
                }
                Event::Resize(..) => view.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            state = state.step(GameEvent::Tick { elapsed_ms });
        }
    }
}
