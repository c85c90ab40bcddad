//! Read-only view over an RGBA frame.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Borrowed RGBA pixel buffer, row-major, 4 bytes per pixel.
///
/// The buffer is owned by the engine; a `Frame` only lives for one render call.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Number of bytes a complete buffer of this size holds.
    pub fn expected_len(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// Sample one pixel. Out-of-range coordinates and truncated buffers read as black.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.idx(x, y)
            .and_then(|i| self.pixels.get(i..i + 3))
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .unwrap_or_default()
    }
}
