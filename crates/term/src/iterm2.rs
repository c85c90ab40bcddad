//! iTerm2 inline image renderer (OSC 1337).

use crate::error::Result;
use crate::graphics::{encode_for_cells, EncodedImage};
use crate::pixels::Frame;

/// Render `frame` as an iTerm2 inline image stretched over `cols` x `rows` cells.
pub fn render_iterm2(frame: &Frame<'_>, cols: u16, rows: u16) -> Result<String> {
    let image = encode_for_cells(frame, cols, rows)?;
    Ok(iterm2_sequence(&image, cols, rows))
}

pub fn iterm2_sequence(image: &EncodedImage, cols: u16, rows: u16) -> String {
    format!(
        "\x1b]1337;File=inline=1;size={};width={cols};height={rows};preserveAspectRatio=0:{}\x07",
        image.png_len, image.base64,
    )
}
