//! Kitty graphics protocol renderer.
//!
//! Frames are sent as PNG (`f=100`) with transmit-and-display (`a=T`),
//! errors suppressed (`q=2`) and the image stretched over `c` x `r` cells.
//! Payloads longer than [`KITTY_CHUNK_SIZE`] are split across several
//! APC sequences linked with `m=1` / `m=0`.
//!
//! Every frame reuses one image id and placement id, so the terminal replaces
//! the previous frame instead of storing a new image each tick.

use std::fmt::Write as _;

use crate::error::Result;
use crate::graphics::encode_for_cells;
use crate::pixels::Frame;
use crate::types::KITTY_CHUNK_SIZE;

const APC_START: &str = "\x1b_G";
const APC_END: &str = "\x1b\\";

/// Image id shared by all frames.
pub const KITTY_IMAGE_ID: u32 = 1;

/// Placement id shared by all frames.
pub const KITTY_PLACEMENT_ID: u32 = 1;

/// Delete every image placement on screen.
pub const KITTY_DELETE_ALL: &str = "\x1b_Ga=d,q=2\x1b\\";

/// Render `frame` as kitty graphics escape sequences covering `cols` x `rows` cells.
pub fn render_kitty(frame: &Frame<'_>, cols: u16, rows: u16) -> Result<String> {
    let image = encode_for_cells(frame, cols, rows)?;
    Ok(kitty_sequences(&image.base64, cols, rows))
}

/// Wrap a base64 PNG payload in one or more kitty APC sequences.
pub fn kitty_sequences(payload: &str, cols: u16, rows: u16) -> String {
    let params = format!(
        "a=T,f=100,q=2,c={cols},r={rows},i={KITTY_IMAGE_ID},p={KITTY_PLACEMENT_ID}"
    );

    if payload.len() <= KITTY_CHUNK_SIZE {
        return format!("{APC_START}{params};{payload}{APC_END}");
    }

    let chunks = payload.len().div_ceil(KITTY_CHUNK_SIZE);
    let mut out = String::with_capacity(payload.len() + chunks * 16 + params.len());

    let mut start = 0;
    while start < payload.len() {
        let end = (start + KITTY_CHUNK_SIZE).min(payload.len());
        // base64 is ASCII, so byte offsets are char boundaries.
        let chunk = &payload[start..end];
        let more = u8::from(end < payload.len());
        if start == 0 {
            let _ = write!(out, "{APC_START}{params},m={more};{chunk}{APC_END}");
        } else {
            let _ = write!(out, "{APC_START}m={more};{chunk}{APC_END}");
        }
        start = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences(s: &str) -> Vec<&str> {
        s.split_inclusive(APC_END).collect()
    }

    #[test]
    fn small_payload_is_a_single_sequence() {
        let out = kitty_sequences("QUJD", 80, 23);
        assert_eq!(out, "\x1b_Ga=T,f=100,q=2,c=80,r=23,i=1,p=1;QUJD\x1b\\");
    }

    #[test]
    fn exactly_one_chunk_is_not_split() {
        let payload = "A".repeat(KITTY_CHUNK_SIZE);
        let out = kitty_sequences(&payload, 1, 1);
        assert_eq!(sequences(&out).len(), 1);
        assert!(!out.contains("m="));
    }

    #[test]
    fn large_payload_is_chunked_with_more_flags() {
        let payload = "B".repeat(KITTY_CHUNK_SIZE * 2 + 10);
        let out = kitty_sequences(&payload, 40, 12);
        let seqs = sequences(&out);
        assert_eq!(seqs.len(), 3);
        assert!(seqs[0].starts_with("\x1b_Ga=T,f=100,q=2,c=40,r=12,i=1,p=1,m=1;"));
        assert!(seqs[1].starts_with("\x1b_Gm=1;"));
        assert!(seqs[2].starts_with("\x1b_Gm=0;"));

        let rejoined: String = seqs
            .iter()
            .map(|s| {
                let body = s.trim_end_matches(APC_END);
                &body[body.find(';').unwrap() + 1..]
            })
            .collect();
        assert_eq!(rejoined, payload);
    }

    #[test]
    fn consecutive_frames_replace_one_image() {
        let header = |s: &str| s[..s.find(';').unwrap()].to_string();
        let red = [255u8, 0, 0, 255];
        let blue = [0u8, 0, 255, 255];
        let a = render_kitty(&Frame::new(&red, 1, 1), 4, 2).unwrap();
        let b = render_kitty(&Frame::new(&blue, 1, 1), 4, 2).unwrap();

        assert_ne!(a, b);
        assert_eq!(header(&a), header(&b));
        assert!(header(&a).ends_with(",i=1,p=1"));
    }

    #[test]
    fn renders_real_frame() {
        let px = [255u8, 0, 0, 255];
        let out = render_kitty(&Frame::new(&px, 1, 1), 2, 1).unwrap();
        assert!(out.starts_with("\x1b_Ga=T,f=100,q=2,c=2,r=1,i=1,p=1;iVBORw0KGgo"));
        assert!(out.ends_with(APC_END));
    }
}
