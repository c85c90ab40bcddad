//! Render-mode dispatch.
//!
//! The mode is resolved once at session start; every frame goes through the
//! same renderer afterwards.

use crate::error::Result;
use crate::halfblock::render_half_block;
use crate::iterm2::render_iterm2;
use crate::kitty::render_kitty;
use crate::pixels::Frame;
use crate::types::{Capability, RenderMode};

/// Renders engine frames into terminal rows for a fixed [`RenderMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRenderer {
    mode: RenderMode,
}

impl FrameRenderer {
    /// Create a renderer, resolving `Auto` against `capability`.
    pub fn new(mode: RenderMode, capability: Capability) -> Self {
        let mode = mode.resolve(capability);
        log::info!("render mode: {}", mode.as_str());
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render `frame` over a `cols` x `rows` cell area.
    ///
    /// Always yields `rows` lines. Image modes put the whole escape payload on
    /// the first line and leave the rest empty so the host reserves the area.
    pub fn render(&self, frame: &Frame<'_>, cols: u16, rows: u16) -> Result<Vec<String>> {
        let image = match self.mode {
            RenderMode::Kitty => render_kitty(frame, cols, rows)?,
            RenderMode::Iterm2 => render_iterm2(frame, cols, rows)?,
            RenderMode::HalfBlock | RenderMode::Auto => {
                return Ok(render_half_block(frame, cols, rows));
            }
        };

        let mut lines = Vec::with_capacity(rows.max(1) as usize);
        lines.push(image);
        lines.resize(rows.max(1) as usize, String::new());
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_without_graphics_renders_half_blocks() {
        let renderer = FrameRenderer::new(RenderMode::Auto, Capability::None);
        assert_eq!(renderer.mode(), RenderMode::HalfBlock);

        let px = [0u8; 4];
        let lines = renderer.render(&Frame::new(&px, 1, 1), 3, 2).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.ends_with("\x1b[0m")));
    }

    #[test]
    fn image_mode_reserves_rows() {
        let renderer = FrameRenderer::new(RenderMode::Kitty, Capability::None);
        let px = [0u8; 4];
        let lines = renderer.render(&Frame::new(&px, 1, 1), 10, 4).unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("\x1b_G"));
        assert!(lines[1..].iter().all(String::is_empty));
    }

    #[test]
    fn image_mode_propagates_encode_errors() {
        let renderer = FrameRenderer::new(RenderMode::Iterm2, Capability::None);
        let px = [0u8; 3];
        assert!(renderer.render(&Frame::new(&px, 1, 1), 10, 4).is_err());
    }
}
