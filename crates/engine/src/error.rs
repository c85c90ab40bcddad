//! Engine error types

use thiserror::Error;

/// Engine could not be created. Fatal to session start.
#[derive(Error, Debug)]
pub enum InitError {
    /// Framebuffer geometry the engine cannot produce
    #[error("invalid framebuffer size {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },
}

/// Unrecoverable condition raised by the engine during a tick.
///
/// The frame loop treats every fault as a request to quit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineFault {
    /// The game asked the process to exit
    #[error("engine exited with status {0}")]
    Exit(i32),

    /// The engine hit an internal error
    #[error("engine trapped: {0}")]
    Trap(String),
}
