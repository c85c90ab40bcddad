//! PatternEngine: a self-contained engine producing an animated test card.
//!
//! Scrolling colour bars with a square marker steered by the directional key
//! codes. The marker turns red while FIRE is held and white while USE is held.

use crate::error::{EngineFault, InitError};
use crate::types::keys::*;
use crate::Engine;

const BARS: [[u8; 3]; 8] = [
    [192, 192, 192],
    [192, 192, 0],
    [0, 192, 192],
    [0, 192, 0],
    [192, 0, 192],
    [192, 0, 0],
    [0, 0, 192],
    [16, 16, 16],
];

const MARKER_SIZE: u32 = 8;
const MARKER_SPEED: i32 = 2;

#[derive(Debug, Clone)]
pub struct PatternEngine {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    ticks: u64,
    exit_after: Option<u64>,
    marker_x: i32,
    marker_y: i32,
    /// Indexed by key code.
    held: [bool; 256],
}

impl PatternEngine {
    /// Create an engine with a `width` x `height` framebuffer.
    pub fn init(width: u32, height: u32) -> Result<Self, InitError> {
        if width < MARKER_SIZE || height < MARKER_SIZE || width > 4096 || height > 4096 {
            return Err(InitError::InvalidGeometry { width, height });
        }

        let mut engine = Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            ticks: 0,
            exit_after: None,
            marker_x: (width / 2) as i32,
            marker_y: (height / 2) as i32,
            held: [false; 256],
        };
        engine.draw();
        log::debug!("pattern engine initialised at {width}x{height}");
        Ok(engine)
    }

    /// Fault with [`EngineFault::Exit`] on the `ticks`-th tick.
    pub fn with_exit_after(mut self, ticks: u64) -> Self {
        self.exit_after = Some(ticks);
        self
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn marker(&self) -> (i32, i32) {
        (self.marker_x, self.marker_y)
    }

    pub fn is_held(&self, code: u8) -> bool {
        self.held[code as usize]
    }

    fn step_marker(&mut self) {
        let mut dx = 0;
        let mut dy = 0;
        if self.held[KEY_LEFTARROW as usize] || self.held[KEY_STRAFE_L as usize] {
            dx -= MARKER_SPEED;
        }
        if self.held[KEY_RIGHTARROW as usize] || self.held[KEY_STRAFE_R as usize] {
            dx += MARKER_SPEED;
        }
        if self.held[KEY_UPARROW as usize] {
            dy -= MARKER_SPEED;
        }
        if self.held[KEY_DOWNARROW as usize] {
            dy += MARKER_SPEED;
        }

        let max_x = (self.width - MARKER_SIZE) as i32;
        let max_y = (self.height - MARKER_SIZE) as i32;
        self.marker_x = (self.marker_x + dx).clamp(0, max_x);
        self.marker_y = (self.marker_y + dy).clamp(0, max_y);
    }

    fn draw(&mut self) {
        let bar_w = (self.width / BARS.len() as u32).max(1);
        let shift = self.ticks as u32;
        let marker = if self.held[KEY_FIRE as usize] {
            [255, 32, 32]
        } else if self.held[KEY_USE as usize] {
            [255, 255, 255]
        } else {
            [255, 200, 0]
        };

        let width = self.width;
        for (i, px) in self.pixels.chunks_exact_mut(4).enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;

            // Left of or above the marker wraps to a large offset.
            let in_marker = ((x as i32 - self.marker_x) as u32) < MARKER_SIZE
                && ((y as i32 - self.marker_y) as u32) < MARKER_SIZE;

            let rgb = if in_marker {
                marker
            } else {
                let bar = ((x + shift) / bar_w) as usize % BARS.len();
                // Darken towards the bottom so vertical sampling is visible.
                let shade = 255 - (y * 128 / self.height) as u16;
                let [r, g, b] = BARS[bar];
                [
                    (r as u16 * shade / 255) as u8,
                    (g as u16 * shade / 255) as u8,
                    (b as u16 * shade / 255) as u8,
                ]
            };

            px[0] = rgb[0];
            px[1] = rgb[1];
            px[2] = rgb[2];
            px[3] = 255;
        }
    }
}

impl Engine for PatternEngine {
    fn tick(&mut self) -> Result<(), EngineFault> {
        self.ticks += 1;
        if self.exit_after.is_some_and(|n| self.ticks >= n) {
            return Err(EngineFault::Exit(0));
        }
        self.step_marker();
        self.draw();
        Ok(())
    }

    fn frame_rgba(&self) -> &[u8] {
        &self.pixels
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn push_key(&mut self, pressed: bool, code: u8) {
        self.held[code as usize] = pressed;
    }
}
