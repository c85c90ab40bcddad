//! Half-block cell renderer.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground colour of `▀`, the lower one as the background colour.
//! Works in any true-colour terminal at any grid size.

use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;

use crate::pixels::{Frame, Rgb};

pub const HALF_BLOCK: char = '▀';

/// Render `frame` into exactly `rows` lines of `cols` half-block cells.
///
/// Sampling is nearest-neighbor with `scale_x = w / cols` and
/// `scale_y = h / (rows * 2)`; every line ends with a colour reset.
pub fn render_half_block(frame: &Frame<'_>, cols: u16, rows: u16) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows as usize);
    if rows == 0 {
        return lines;
    }

    let scale_x = if cols == 0 {
        0.0
    } else {
        f64::from(frame.width()) / f64::from(cols)
    };
    let scale_y = f64::from(frame.height()) / (f64::from(rows) * 2.0);

    // Escape codes are ~40 bytes per cell.
    let line_capacity = cols as usize * 42 + 8;

    for row in 0..u32::from(rows) {
        let top_y = (f64::from(row * 2) * scale_y).floor() as u32;
        let bottom_y = (f64::from(row * 2 + 1) * scale_y).floor() as u32;

        let mut line = String::with_capacity(line_capacity);
        for col in 0..u32::from(cols) {
            let x = (f64::from(col) * scale_x).floor() as u32;
            write_cell(&mut line, frame.get(x, top_y), frame.get(x, bottom_y));
        }
        // Writing into a String cannot fail.
        let _ = ResetColor.write_ansi(&mut line);
        lines.push(line);
    }

    lines
}

fn write_cell(out: &mut String, top: Rgb, bottom: Rgb) {
    let _ = SetForegroundColor(rgb_to_color(top)).write_ansi(out);
    let _ = SetBackgroundColor(rgb_to_color(bottom)).write_ansi(out);
    out.push(HALF_BLOCK);
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
