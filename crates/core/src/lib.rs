//! Frame loop core - drives an engine on a fixed schedule
//!
//! This crate glues the pieces together without touching the terminal:
//!
//! - **Deterministic**: time enters only through `Instant` arguments
//! - **Single-threaded**: ticks, input and renders share one call stack
//! - **Host-agnostic**: the shell is a small [`Host`] trait
//!
//! # Module Structure
//!
//! - [`clock`]: fixed-period tick deadlines with bounded catch-up
//! - [`config`]: render mode, release strategy and timing
//! - [`coordinator`]: the frame loop, render cache and lifecycle
//! - [`session`]: caller-owned engine handle that outlives a loop
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use ttydoom_core::{Config, Coordinator, ExitReason, Host, Session};
//! use ttydoom_core::types::RenderMode;
//! use ttydoom_engine::PatternEngine;
//!
//! struct Shell { rows: u16 }
//!
//! impl Host for Shell {
//!     fn rows(&self) -> u16 { self.rows }
//!     fn request_redraw(&mut self) {}
//!     fn exit(&mut self, _reason: ExitReason) {}
//! }
//!
//! let mut session = Session::new(PatternEngine::init(64, 40).unwrap());
//! let config = Config { render_mode: RenderMode::HalfBlock, ..Config::default() };
//! let mut frame_loop = Coordinator::new(&mut session, Shell { rows: 12 }, config, Instant::now());
//!
//! frame_loop.handle_input("w", Instant::now());
//! assert!(frame_loop.tick());
//! assert_eq!(frame_loop.render(40).len(), 12);
//! ```

pub mod clock;
pub mod config;
pub mod coordinator;
pub mod session;

pub use ttydoom_engine as engine;
pub use ttydoom_input as input;
pub use ttydoom_term as term;
pub use ttydoom_types as types;

pub use clock::TickClock;
pub use config::Config;
pub use coordinator::{Coordinator, ExitReason, Host, LoopState, RenderStats};
pub use session::Session;
