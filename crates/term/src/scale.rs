//! Nearest-neighbor downscaling.

use std::borrow::Cow;

use crate::pixels::Frame;

/// Result of [`scale_to_fit`]. Borrows the source when no scaling was needed.
#[derive(Debug, Clone)]
pub struct Scaled<'a> {
    pub pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
}

impl Scaled<'_> {
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.pixels, self.width, self.height)
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }
}

/// Downscale `frame` to fit within `max_w` x `max_h`, keeping aspect ratio.
///
/// Frames that already fit are returned as-is. Otherwise a single factor
/// `min(max_w / w, max_h / h)` is applied and every destination pixel copies
/// the source pixel at `(floor(x / factor), floor(y / factor))`. Never upsamples.
pub fn scale_to_fit<'a>(frame: &Frame<'a>, max_w: u32, max_h: u32) -> Scaled<'a> {
    let (src_w, src_h) = (frame.width(), frame.height());
    let (max_w, max_h) = (max_w.max(1), max_h.max(1));

    if src_w <= max_w && src_h <= max_h {
        return Scaled {
            pixels: Cow::Borrowed(frame.pixels()),
            width: src_w,
            height: src_h,
        };
    }

    let factor = f64::min(
        f64::from(max_w) / f64::from(src_w),
        f64::from(max_h) / f64::from(src_h),
    );
    let dst_w = ((f64::from(src_w) * factor).floor() as u32).clamp(1, src_w);
    let dst_h = ((f64::from(src_h) * factor).floor() as u32).clamp(1, src_h);

    let src = frame.pixels();
    let src_stride = src_w as usize * 4;
    let mut out = vec![0u8; dst_w as usize * dst_h as usize * 4];

    for (y, dst_row) in out.chunks_exact_mut(dst_w as usize * 4).enumerate() {
        let sy = ((y as f64 / factor).floor() as usize).min(src_h as usize - 1);
        let row_start = sy * src_stride;
        for (x, dst_px) in dst_row.chunks_exact_mut(4).enumerate() {
            let sx = ((x as f64 / factor).floor() as usize).min(src_w as usize - 1);
            let i = row_start + sx * 4;
            if let Some(px) = src.get(i..i + 4) {
                dst_px.copy_from_slice(px);
            }
        }
    }

    Scaled {
        pixels: Cow::Owned(out),
        width: dst_w,
        height: dst_h,
    }
}
