//! Shared image-protocol pipeline: fit to the cell grid, PNG-encode, base64.

use base64::{engine::general_purpose, Engine as _};

use crate::error::Result;
use crate::pixels::Frame;
use crate::png::encode_png;
use crate::scale::scale_to_fit;
use crate::types::{CELL_PIXEL_H, CELL_PIXEL_W};

/// A PNG frame ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Standard base64 of the PNG bytes.
    pub base64: String,
    /// Size of the PNG before base64.
    pub png_len: usize,
    pub width: u32,
    pub height: u32,
}

/// Pixel budget for a `cols` x `rows` cell area.
pub fn pixel_budget(cols: u16, rows: u16) -> (u32, u32) {
    (
        u32::from(cols.max(1)) * CELL_PIXEL_W,
        u32::from(rows.max(1)) * CELL_PIXEL_H,
    )
}

/// Downscale `frame` to the pixel budget of the cell area and encode it.
pub fn encode_for_cells(frame: &Frame<'_>, cols: u16, rows: u16) -> Result<EncodedImage> {
    let (max_w, max_h) = pixel_budget(cols, rows);
    let scaled = scale_to_fit(frame, max_w, max_h);
    let png = encode_png(&scaled.frame())?;

    Ok(EncodedImage {
        base64: general_purpose::STANDARD.encode(&png),
        png_len: png.len(),
        width: scaled.width,
        height: scaled.height,
    })
}
