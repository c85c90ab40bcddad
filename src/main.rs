//! Terminal game runner (default binary).
//!
//! Draws the engine framebuffer with the best protocol the terminal offers
//! (kitty, iTerm2 or true-colour half blocks) and feeds keystrokes back to
//! the engine as press/release pairs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use ttydoom::core::{Config, Coordinator, ExitReason, Host, Session};
use ttydoom::engine::PatternEngine;
use ttydoom::input::token_from_key;
use ttydoom::term::{detect, TerminalSession};
use ttydoom::types::{ReleaseStrategy, RenderMode, TICKS_PER_SECOND};

#[derive(Parser, Debug)]
#[command(name = "ttydoom")]
#[command(version)]
#[command(about = "Play a framebuffer game engine inside a text terminal")]
struct Cli {
    /// Render mode: auto, kitty, iterm2 or halfblock
    #[arg(long, env = "TTYDOOM_MODE", default_value = "auto", value_parser = parse_mode)]
    mode: RenderMode,

    /// Key release handling: auto, synthetic or explicit
    #[arg(long, env = "TTYDOOM_RELEASE", default_value = "auto", value_parser = parse_release)]
    release: ReleaseStrategy,

    /// Engine ticks per second
    #[arg(long, default_value_t = TICKS_PER_SECOND)]
    fps: u32,

    /// Hide the key help line under the frame
    #[arg(long)]
    no_footer: bool,

    /// Framebuffer width of the built-in engine
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Framebuffer height of the built-in engine
    #[arg(long, default_value_t = 200)]
    height: u32,
}

fn parse_mode(s: &str) -> Result<RenderMode, String> {
    RenderMode::from_str(s)
        .ok_or_else(|| format!("unknown render mode '{s}' (auto, kitty, iterm2, halfblock)"))
}

fn parse_release(s: &str) -> Result<ReleaseStrategy, String> {
    ReleaseStrategy::from_str(s)
        .ok_or_else(|| format!("unknown release strategy '{s}' (auto, synthetic, explicit)"))
}

/// Host state shared with the frame loop.
struct TermHost {
    rows: u16,
    redraw: bool,
    exit: Option<ExitReason>,
}

impl TermHost {
    fn new(rows: u16) -> Self {
        Self {
            rows,
            redraw: true,
            exit: None,
        }
    }

    fn resize(&mut self, rows: u16) {
        self.rows = rows;
        self.redraw = true;
    }

    fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

impl Host for TermHost {
    fn rows(&self) -> u16 {
        self.rows
    }

    fn request_redraw(&mut self) {
        self.redraw = true;
    }

    fn exit(&mut self, reason: ExitReason) {
        self.exit = Some(reason);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = Config {
        render_mode: cli.mode,
        release: cli.release,
        ticks_per_second: cli.fps.max(1),
        show_footer: !cli.no_footer,
        ..Config::default()
    };

    // Fail before touching the terminal so the error stays readable.
    let engine = PatternEngine::init(cli.width, cli.height).context("failed to start engine")?;
    let mut session = Session::new(engine);

    let mut term = TerminalSession::new();
    let reports_release = term.enter(config.release != ReleaseStrategy::Synthetic)?;

    let result = run(&mut term, &mut session, config, reports_release);

    // Always try to restore terminal state.
    let _ = term.exit();

    let reason = result?;
    log::info!("session ended after {} ticks", session.total_ticks());
    if let ExitReason::Engine(fault) = reason {
        eprintln!("ttydoom: {fault}");
    }
    Ok(())
}

fn run(
    term: &mut TerminalSession,
    session: &mut Session<PatternEngine>,
    config: Config,
    reports_release: bool,
) -> Result<ExitReason> {
    let config = config.resolved_with(detect, reports_release);
    let (_, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut frame_loop = Coordinator::new(session, TermHost::new(rows), config, Instant::now());

    loop {
        if let Some(reason) = frame_loop.host_mut().exit.take() {
            return Ok(reason);
        }

        if frame_loop.host_mut().take_redraw() {
            let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));
            term.draw(frame_loop.render(width))?;
        }

        // Sleep in input poll until the next tick or synthetic release.
        let timeout = frame_loop
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(token) = token_from_key(key) {
                        match key.kind {
                            KeyEventKind::Press => {
                                frame_loop.handle_input(&token, Instant::now());
                            }
                            KeyEventKind::Repeat => {
                                // Explicit mode: the key stays held until its release arrives.
                            }
                            KeyEventKind::Release => {
                                frame_loop.handle_release(&token);
                            }
                        }
                    }
                }
                Event::Resize(_, rows) => {
                    frame_loop.host_mut().resize(rows);
                    frame_loop.invalidate();
                    term.invalidate();
                }
                _ => {}
            }
        }

        frame_loop.poll(Instant::now());
    }
}

/// Log to a file: stdout and stderr belong to the rendered frame.
fn init_logging() -> Result<()> {
    let log_path = std::env::var_os("TTYDOOM_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("ttydoom.log"));
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file at {}", log_path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
