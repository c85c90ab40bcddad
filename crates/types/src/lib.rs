//! Shared types and constants - no external dependencies
//!
//! This crate defines the vocabulary shared by the renderer, the input
//! translator and the frame loop. Everything here is plain data.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 35 | Engine simulation rate |
//! | `KEY_RELEASE_MS` | 150 | Synthetic key-up delay |
//! | `MAX_CATCH_UP_TICKS` | 5 | Ticks run per poll before rebasing the schedule |
//!
//! # Render Budget
//!
//! Image protocols downscale the frame to roughly `CELL_PIXEL_W` x
//! `CELL_PIXEL_H` source pixels per terminal cell, which is close to the
//! pixel size of a typical monospace cell.
//!
//! # Examples
//!
//! ```
//! use ttydoom_types::{Capability, RenderMode, TICKS_PER_SECOND};
//!
//! let mode = RenderMode::from_str("Kitty").unwrap();
//! assert_eq!(mode, RenderMode::Kitty);
//!
//! // `auto` resolves once against the detected terminal capability.
//! assert_eq!(RenderMode::Auto.resolve(Capability::None), RenderMode::HalfBlock);
//!
//! assert_eq!(TICKS_PER_SECOND, 35);
//! ```

use std::time::Duration;

pub mod keys;

/// Engine simulation rate (ticks per second).
pub const TICKS_PER_SECOND: u32 = 35;

/// Delay before a synthetic key release is sent, in milliseconds.
pub const KEY_RELEASE_MS: u64 = 150;

/// Upper bound on ticks executed by a single poll when the loop falls behind.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Approximate source pixels per terminal cell, horizontally.
pub const CELL_PIXEL_W: u32 = 10;

/// Approximate source pixels per terminal cell, vertically.
pub const CELL_PIXEL_H: u32 = 20;

/// Maximum base64 payload carried by one kitty graphics escape sequence.
pub const KITTY_CHUNK_SIZE: usize = 4096;

/// Rows reserved below the frame for the help footer.
pub const FOOTER_ROWS: u16 = 1;

/// Help text appended below every rendered frame.
pub const HELP_TEXT: &str =
    "WASD/arrows move  SPACE use  CTRL fire  ENTER select  ESC menu  0-9 weapons  Q quit";

/// Fixed tick period derived from a tick rate.
///
/// A rate of zero is treated as one tick per second.
///
/// ```
/// use ttydoom_types::tick_period;
///
/// assert_eq!(tick_period(35).as_micros(), 28_571);
/// ```
pub fn tick_period(ticks_per_second: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(ticks_per_second.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_timing_defaults() {
        assert_eq!(TICKS_PER_SECOND, 35);
        assert_eq!(KEY_RELEASE_MS, 150);
        assert_eq!(KITTY_CHUNK_SIZE, 4096);
        assert_eq!((CELL_PIXEL_W, CELL_PIXEL_H), (10, 20));
    }

    #[test]
    fn tick_period_matches_native_rate() {
        let period = tick_period(TICKS_PER_SECOND);
        assert!(period > Duration::from_micros(28_500));
        assert!(period < Duration::from_micros(28_600));
    }

    #[test]
    fn tick_period_zero_rate_does_not_divide_by_zero() {
        assert_eq!(tick_period(0), Duration::from_secs(1));
    }

    #[test]
    fn render_mode_round_trips_names() {
        for mode in [
            RenderMode::Auto,
            RenderMode::Kitty,
            RenderMode::Iterm2,
            RenderMode::HalfBlock,
        ] {
            assert_eq!(RenderMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(RenderMode::from_str("sixel"), None);
    }

    #[test]
    fn auto_mode_follows_capability() {
        assert_eq!(RenderMode::Auto.resolve(Capability::Kitty), RenderMode::Kitty);
        assert_eq!(RenderMode::Auto.resolve(Capability::Iterm2), RenderMode::Iterm2);
        assert_eq!(RenderMode::Auto.resolve(Capability::None), RenderMode::HalfBlock);
    }

    #[test]
    fn explicit_mode_ignores_capability() {
        assert_eq!(
            RenderMode::HalfBlock.resolve(Capability::Kitty),
            RenderMode::HalfBlock
        );
        assert_eq!(RenderMode::Kitty.resolve(Capability::None), RenderMode::Kitty);
    }

    #[test]
    fn release_strategy_resolution() {
        assert_eq!(
            ReleaseStrategy::Auto.resolve(true),
            ReleaseStrategy::Explicit
        );
        assert_eq!(
            ReleaseStrategy::Auto.resolve(false),
            ReleaseStrategy::Synthetic
        );
        assert_eq!(
            ReleaseStrategy::Synthetic.resolve(true),
            ReleaseStrategy::Synthetic
        );
        assert_eq!(ReleaseStrategy::from_str("EXPLICIT"), Some(ReleaseStrategy::Explicit));
    }
}

/// Image-display capability of the attached terminal.
///
/// Detected once per session from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Kitty graphics protocol (kitty, ghostty, WezTerm, Konsole).
    Kitty,
    /// iTerm2 inline images (OSC 1337).
    Iterm2,
    /// No known graphics protocol.
    None,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Kitty => "kitty",
            Capability::Iterm2 => "iterm2",
            Capability::None => "none",
        }
    }
}

/// How frames are drawn into the terminal.
///
/// - **Auto**: resolved once at session start from [`Capability`]
/// - **Kitty**: PNG frames over the kitty graphics protocol
/// - **Iterm2**: PNG frames as iTerm2 inline images
/// - **HalfBlock**: true-colour `▀` cells, works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Auto,
    Kitty,
    Iterm2,
    HalfBlock,
}

impl RenderMode {
    /// Parse render mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use ttydoom_types::RenderMode;
    ///
    /// assert_eq!(RenderMode::from_str("halfblock"), Some(RenderMode::HalfBlock));
    /// assert_eq!(RenderMode::from_str("half-block"), Some(RenderMode::HalfBlock));
    /// assert_eq!(RenderMode::from_str("ITERM2"), Some(RenderMode::Iterm2));
    /// assert_eq!(RenderMode::from_str("ascii"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(RenderMode::Auto),
            "kitty" => Some(RenderMode::Kitty),
            "iterm2" | "iterm" => Some(RenderMode::Iterm2),
            "halfblock" | "half-block" | "blocks" => Some(RenderMode::HalfBlock),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Auto => "auto",
            RenderMode::Kitty => "kitty",
            RenderMode::Iterm2 => "iterm2",
            RenderMode::HalfBlock => "halfblock",
        }
    }

    /// Resolve `Auto` against a detected capability. Explicit modes are returned as-is.
    pub fn resolve(self, capability: Capability) -> Self {
        match self {
            RenderMode::Auto => match capability {
                Capability::Kitty => RenderMode::Kitty,
                Capability::Iterm2 => RenderMode::Iterm2,
                Capability::None => RenderMode::HalfBlock,
            },
            mode => mode,
        }
    }

    /// Whether this mode transmits a bitmap rather than text cells.
    pub fn is_image(&self) -> bool {
        matches!(self, RenderMode::Kitty | RenderMode::Iterm2)
    }
}

/// How key releases reach the engine.
///
/// Most terminals only report key-down. `Synthetic` schedules a release
/// [`KEY_RELEASE_MS`] after the last press of a token; `Explicit` forwards
/// release events reported by the keyboard-enhancement protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReleaseStrategy {
    #[default]
    Auto,
    Synthetic,
    Explicit,
}

impl ReleaseStrategy {
    /// Parse release strategy from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ReleaseStrategy::Auto),
            "synthetic" | "timer" => Some(ReleaseStrategy::Synthetic),
            "explicit" => Some(ReleaseStrategy::Explicit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStrategy::Auto => "auto",
            ReleaseStrategy::Synthetic => "synthetic",
            ReleaseStrategy::Explicit => "explicit",
        }
    }

    /// Resolve `Auto` given whether the terminal reports key releases.
    pub fn resolve(self, reports_release: bool) -> Self {
        match self {
            ReleaseStrategy::Auto if reports_release => ReleaseStrategy::Explicit,
            ReleaseStrategy::Auto => ReleaseStrategy::Synthetic,
            strategy => strategy,
        }
    }
}
