//! Engine contract.
//!
//! The game itself is an external collaborator. The frame loop only needs a
//! framebuffer it can read after each tick and a way to push key transitions.
//! [`PatternEngine`] is a built-in implementation used by the binary and tests.

pub mod error;
pub mod pattern;

pub use ttydoom_types as types;

pub use error::{EngineFault, InitError};
pub use pattern::PatternEngine;

/// A tick-driven game engine with an RGBA framebuffer.
///
/// `width` and `height` are fixed once the engine is initialised, and
/// `frame_rgba` always holds `width * height * 4` bytes.
pub trait Engine {
    /// Advance the simulation by one step.
    fn tick(&mut self) -> Result<(), EngineFault>;

    /// Current framebuffer, row-major RGBA.
    fn frame_rgba(&self) -> &[u8];

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Deliver a key transition in the engine's key-code space.
    fn push_key(&mut self, pressed: bool, code: u8);
}
