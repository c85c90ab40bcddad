//! TerminalSession: owns the real terminal while a game runs.
//!
//! Enters raw mode and the alternate screen, draws row lists produced by the
//! frame loop, and restores everything on exit.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::kitty::KITTY_DELETE_ALL;

pub struct TerminalSession {
    stdout: io::Stdout,
    buf: Vec<u8>,
    needs_clear: bool,
    enhanced_keyboard: bool,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            needs_clear: true,
            enhanced_keyboard: false,
        }
    }

    /// Take over the terminal.
    ///
    /// With `want_key_release`, asks the terminal to report key releases.
    /// Returns whether that request is in effect.
    pub fn enter(&mut self, want_key_release: bool) -> Result<bool> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;

        if want_key_release && terminal::supports_keyboard_enhancement().unwrap_or(false) {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            self.enhanced_keyboard = true;
        }

        self.flush_buf()?;
        log::debug!(
            "terminal entered (key release reporting: {})",
            self.enhanced_keyboard
        );
        Ok(self.enhanced_keyboard)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(KITTY_DELETE_ALL))?;
        if self.enhanced_keyboard {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.enhanced_keyboard = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to clear the screen first.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.needs_clear = true;
    }

    /// Draw rows from the top-left corner.
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        if self.needs_clear {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.needs_clear = false;
        }
        encode_lines_into(lines, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a frame of rows into `out`.
///
/// Empty rows are skipped rather than cleared so an image placed by the
/// first row stays visible underneath them.
pub fn encode_lines_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    for (y, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(Print(line))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    }
    out.queue(ResetColor)?;
    Ok(())
}
