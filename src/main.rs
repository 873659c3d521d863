//! Terminal runner (default binary).
//!
//! One frame is one game tick: gather input until the frame deadline, step
//! the session, draw, then resolve line clears and game over.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use megatetris::core::{GameConfig, Session, TickOutcome};
use megatetris::input::{should_quit, HoldRelease, InputHandler};
use megatetris::term::{FrameBuffer, GameView, Scene, StatusPanel, TerminalRenderer, Viewport};
use megatetris::types::{
    Status, DEFAULT_COLUMNS, DEFAULT_FPS, DEFAULT_ROWS, HOLD_TIMEOUT_MS, MAX_BOARD_SIDE,
    MIN_BOARD_SIDE,
};

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_COLUMNS, value_parser = clap::value_parser!(u8).range(MIN_BOARD_SIDE as i64..=MAX_BOARD_SIDE as i64), help = "Board width in cells")]
    columns: u8,

    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u8).range(MIN_BOARD_SIDE as i64..=MAX_BOARD_SIDE as i64), help = "Board height in cells")]
    rows: u8,

    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240), help = "Frames (and ticks) per second")]
    fps: u32,

    #[arg(long, help = "Seed for the piece queue (random when absent)")]
    seed: Option<u64>,

    #[arg(
        long,
        default_value_t = HOLD_TIMEOUT_MS,
        help = "Extra milliseconds a key stays held after its last repeat, on terminals without key-release events"
    )]
    hold_timeout_ms: u64,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,
}

fn init_logging(cli: &Cli) -> Result<()> {
    // The terminal belongs to the game; without a log file nothing is emitted.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = GameConfig {
        columns: cli.columns,
        rows: cli.rows,
        seed: cli.seed.unwrap_or_else(rand::random),
    };
    info!(?config, fps = cli.fps, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let status = result?;
    println!(
        "Score: {}  Lines: {}  Level: {}",
        status.score, status.lines, status.level
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli, config: GameConfig) -> Result<Status> {
    let mut session = Session::new(config, StatusPanel::new());
    let release = if term.reports_key_releases() {
        HoldRelease::ReleaseEvents
    } else {
        HoldRelease::Timeout(Duration::from_millis(cli.hold_timeout_ms))
    };
    let mut input = InputHandler::with_release(release);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_secs(1) / cli.fps;
    let mut deadline = Instant::now() + frame;

    loop {
        // Input until the frame deadline.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(session.status());
                    }
                    input.handle_key_event(key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        deadline += frame;

        let tick = input.take_tick_input(Instant::now());
        session.step(&tick);
        draw(term, &view, &session, &mut fb)?;

        if session.resolve() == TickOutcome::GameOver {
            draw(term, &view, &session, &mut fb)?;
            wait_for_key()?;
            return Ok(session.status());
        }

        // Don't try to catch up after a stall.
        let now = Instant::now();
        if deadline < now {
            deadline = now;
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &Session<StatusPanel>,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(&Scene::from_session(session), Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
