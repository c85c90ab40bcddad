//! Terminal video output.
//!
//! Turns an engine's RGBA framebuffer into something a terminal can show,
//! either as true-colour half-block cells or as a bitmap sent over a
//! graphics protocol. Everything except [`TerminalSession`] is pure and
//! allocation-bounded per frame.
//!
//! Pipeline:
//! - [`detect`]: classify the terminal once from the environment
//! - [`scale`]: nearest-neighbor fit into a pixel budget
//! - [`png`]: lossless RGBA encoding
//! - [`halfblock`], [`kitty`], [`iterm2`]: protocol-specific output
//! - [`frame`]: mode dispatch used by the frame loop

pub mod detect;
pub mod error;
pub mod frame;
pub mod graphics;
pub mod halfblock;
pub mod iterm2;
pub mod kitty;
pub mod pixels;
pub mod png;
pub mod renderer;
pub mod scale;

pub use ttydoom_types as types;

pub use detect::{detect, detect_with};
pub use error::EncodeError;
pub use frame::FrameRenderer;
pub use graphics::{encode_for_cells, pixel_budget, EncodedImage};
pub use halfblock::{render_half_block, HALF_BLOCK};
pub use iterm2::render_iterm2;
pub use kitty::{
    kitty_sequences, render_kitty, KITTY_DELETE_ALL, KITTY_IMAGE_ID, KITTY_PLACEMENT_ID,
};
pub use pixels::{Frame, Rgb};
pub use png::encode_png;
pub use renderer::{encode_lines_into, TerminalSession};
pub use scale::{scale_to_fit, Scaled};
