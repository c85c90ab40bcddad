//! Minimal PNG encoder for RGBA frames.
//!
//! Emits signature, IHDR (8-bit RGBA, no interlace), a single IDAT holding a
//! zlib stream of unfiltered scanlines, and IEND. Compression runs at the
//! fastest level: a frame is encoded every tick, so latency beats size.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{EncodeError, Result};
use crate::pixels::Frame;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// PNG caps dimensions at 2^31 - 1.
const MAX_DIMENSION: u32 = 0x7fff_ffff;

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            if c & 1 != 0 {
                c = 0xEDB8_8320 ^ (c >> 1);
            } else {
                c >>= 1;
            }
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

static CRC_TABLE: [u32; 256] = make_crc_table();

fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc = CRC_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ 0xFFFF_FFFF
}

/// Append `[length][type][data][crc32(type ++ data)]`, big-endian.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let crc_start = out.len();
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    let crc = crc32(&out[crc_start..]);
    out.extend_from_slice(&crc.to_be_bytes());
}

/// Encode a frame as PNG bytes.
///
/// # Errors
///
/// - [`EncodeError::Dimensions`] for zero or out-of-range sizes
/// - [`EncodeError::BufferSize`] when the pixel buffer is truncated
/// - [`EncodeError::Compress`] when the deflate stream fails
pub fn encode_png(frame: &Frame<'_>) -> Result<Vec<u8>> {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EncodeError::Dimensions { width, height });
    }

    let expected = frame.expected_len();
    let pixels = frame.pixels();
    if pixels.len() < expected {
        return Err(EncodeError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let row_len = width as usize * 4;
    let raw_len = (row_len + 1) * height as usize;

    let mut zlib = ZlibEncoder::new(Vec::with_capacity(raw_len / 2), Compression::fast());
    for row in pixels[..expected].chunks_exact(row_len) {
        zlib.write_all(&[FILTER_NONE])?;
        zlib.write_all(row)?;
    }
    let idat = zlib.finish()?;

    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = 8; // bit depth
    ihdr[9] = COLOR_TYPE_RGBA;
    // compression, filter method, interlace: all zero

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 25 + 12 + idat.len() + 12);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}
