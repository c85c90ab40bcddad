//! Frame loop coordinator.
//!
//! Single-threaded and deadline driven: the host calls [`Coordinator::poll`]
//! whenever it wakes up (input arrived or [`Coordinator::next_deadline`]
//! passed). Ticks, input and renders all run on the caller's thread, so a
//! render always sees the frame produced by the last completed tick.
//!
//! Lifecycle: `Running` from construction until [`Coordinator::dispose`],
//! then `Stopped` for good. Quitting and engine faults both dispose first and
//! then notify the host exactly once.

use std::time::Instant;

use crate::clock::TickClock;
use crate::config::Config;
use crate::engine::{Engine, EngineFault};
use crate::input::{should_quit, InputHandler, KeyTransition};
use crate::session::Session;
use crate::term::{detect, Frame, FrameRenderer};
use crate::types::{tick_period, Capability, ReleaseStrategy, RenderMode, FOOTER_ROWS, HELP_TEXT};

/// The shell hosting the frame loop.
pub trait Host {
    /// Terminal rows available, footer included.
    fn rows(&self) -> u16;

    /// A new frame is ready; call [`Coordinator::render`] soon.
    fn request_redraw(&mut self);

    /// The loop has stopped and will not run again.
    fn exit(&mut self, reason: ExitReason);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The player pressed a quit key.
    Quit,
    /// The engine faulted during a tick.
    Engine(EngineFault),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Render counters, mostly for tests and the exit log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_rendered: u64,
    pub frames_dropped: u64,
    pub cache_hits: u64,
}

#[derive(Debug)]
struct RenderCache {
    width: u16,
    rows: u16,
    frame_version: u64,
    /// Lines above the footer.
    body: usize,
    lines: Vec<String>,
}

pub struct Coordinator<'s, E: Engine, H: Host> {
    session: &'s mut Session<E>,
    host: H,
    renderer: FrameRenderer,
    input: InputHandler,
    clock: TickClock,
    state: LoopState,
    frame_version: u64,
    cache: Option<RenderCache>,
    show_footer: bool,
    stats: RenderStats,
}

impl<'s, E: Engine, H: Host> Coordinator<'s, E, H> {
    /// Start a frame loop over `session`. The first tick is due one period after `now`.
    ///
    /// An `Auto` render mode is resolved here, once, by probing the environment.
    pub fn new(session: &'s mut Session<E>, host: H, config: Config, now: Instant) -> Self {
        let capability = if config.render_mode == RenderMode::Auto {
            detect()
        } else {
            Capability::None
        };
        let renderer = FrameRenderer::new(config.render_mode, capability);
        let input = InputHandler::new(config.release).with_release_delay(config.key_release);

        log::info!(
            "frame loop running: {} ticks/s, {} key release, engine {}x{}",
            config.ticks_per_second,
            input.strategy().as_str(),
            session.engine().width(),
            session.engine().height(),
        );

        Self {
            session,
            host,
            renderer,
            input,
            clock: TickClock::new(tick_period(config.ticks_per_second), now),
            state: LoopState::Running,
            frame_version: 0,
            cache: None,
            show_footer: config.show_footer,
            stats: RenderStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frame_version(&self) -> u64 {
        self.frame_version
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn render_mode(&self) -> RenderMode {
        self.renderer.mode()
    }

    pub fn release_strategy(&self) -> ReleaseStrategy {
        self.input.strategy()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn session(&self) -> &Session<E> {
        &*self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<E> {
        &mut *self.session
    }

    /// When the host should call [`poll`](Self::poll) next at the latest.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.is_running() {
            return None;
        }
        let tick = self.clock.next_deadline();
        Some(match self.input.next_deadline() {
            Some(release) => release.min(tick),
            None => tick,
        })
    }

    /// Fire everything due at `now`: synthetic key releases, then ticks.
    pub fn poll(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }

        let released = self.input.expire(now);
        self.forward(&released);

        let due = self.clock.due(now);
        let mut ticked = false;
        for _ in 0..due {
            if !self.tick() {
                return;
            }
            ticked = true;
        }
        if ticked {
            self.host.request_redraw();
        }
    }

    /// Run one engine tick immediately. Returns `false` once the loop has stopped.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.session.engine_mut().tick() {
            Ok(()) => {
                self.session.record_tick();
                self.frame_version += 1;
                true
            }
            Err(fault) => {
                log::warn!("stopping after engine fault: {fault}");
                self.stop(ExitReason::Engine(fault));
                false
            }
        }
    }

    /// A key-down token from the terminal. Returns `false` if the loop has stopped.
    pub fn handle_input(&mut self, token: &str, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        if should_quit(token) {
            log::info!("quit requested");
            self.stop(ExitReason::Quit);
            return true;
        }
        let pressed = self.input.press(token, now);
        self.forward(&pressed);
        true
    }

    /// A key-up token reported by the terminal (explicit release mode).
    pub fn handle_release(&mut self, token: &str) -> bool {
        if !self.is_running() {
            return false;
        }
        let released = self.input.release(token);
        self.forward(&released);
        true
    }

    /// Drop the cached frame so the next render recomputes it.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Rows for a terminal `width` columns wide, footer last.
    ///
    /// Cached until the geometry or the frame changes. Empty once stopped.
    pub fn render(&mut self, width: u16) -> &[String] {
        if !self.is_running() {
            return &[];
        }

        let rows = self.host.rows();
        let fresh = matches!(
            &self.cache,
            Some(c) if c.width == width && c.rows == rows && c.frame_version == self.frame_version
        );

        if fresh {
            self.stats.cache_hits += 1;
        } else {
            let cache = self.compose(width, rows);
            self.cache = Some(cache);
        }

        self.cache
            .as_ref()
            .map(|c| c.lines.as_slice())
            .unwrap_or(&[])
    }

    fn compose(&mut self, width: u16, rows: u16) -> RenderCache {
        let footer = if self.show_footer { FOOTER_ROWS } else { 0 };
        let body_rows = rows.saturating_sub(footer).max(1);
        let cols = width.max(1);

        let engine = self.session.engine();
        let frame = Frame::new(engine.frame_rgba(), engine.width(), engine.height());

        let mut lines = match self.renderer.render(&frame, cols, body_rows) {
            Ok(lines) => {
                self.stats.frames_rendered += 1;
                lines
            }
            Err(err) => {
                self.stats.frames_dropped += 1;
                log::warn!("dropping frame {}: {err}", self.frame_version);
                // Keep showing the last good frame.
                let mut stale = match self.cache.take() {
                    Some(mut old) => {
                        old.lines.truncate(old.body);
                        old.lines
                    }
                    None => Vec::new(),
                };
                stale.resize(body_rows as usize, String::new());
                stale
            }
        };

        let body = lines.len();
        if self.show_footer {
            lines.push(HELP_TEXT.chars().take(cols as usize).collect());
        }

        RenderCache {
            width,
            rows,
            frame_version: self.frame_version,
            body,
            lines,
        }
    }

    /// Stop the loop: release held keys and drop cached output.
    ///
    /// Idempotent; returns `true` only for the call that actually stopped it.
    pub fn dispose(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = LoopState::Stopped;

        let released = self.input.release_all();
        let engine = self.session.engine_mut();
        for t in released {
            engine.push_key(false, t.code);
        }
        self.cache = None;

        log::info!(
            "frame loop stopped at frame {} ({} rendered, {} dropped, {} cached)",
            self.frame_version,
            self.stats.frames_rendered,
            self.stats.frames_dropped,
            self.stats.cache_hits,
        );
        true
    }

    fn stop(&mut self, reason: ExitReason) {
        if self.dispose() {
            self.host.exit(reason);
        }
    }

    fn forward(&mut self, transitions: &[KeyTransition]) {
        let engine = self.session.engine_mut();
        for t in transitions {
            engine.push_key(t.pressed, t.code);
        }
    }
}

impl<E: Engine, H: Host> Drop for Coordinator<'_, E, H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
