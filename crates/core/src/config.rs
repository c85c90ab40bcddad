//! Frame loop configuration.

use std::time::Duration;

use crate::types::{Capability, ReleaseStrategy, RenderMode, KEY_RELEASE_MS, TICKS_PER_SECOND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub render_mode: RenderMode,
    pub release: ReleaseStrategy,
    pub ticks_per_second: u32,
    pub key_release: Duration,
    pub show_footer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Auto,
            release: ReleaseStrategy::Auto,
            ticks_per_second: TICKS_PER_SECOND,
            key_release: Duration::from_millis(KEY_RELEASE_MS),
            show_footer: true,
        }
    }
}

impl Config {
    /// Like [`resolved`](Self::resolved), running `probe` only when the render mode is `Auto`.
    pub fn resolved_with<F>(self, probe: F, reports_release: bool) -> Self
    where
        F: FnOnce() -> Capability,
    {
        let capability = if self.render_mode == RenderMode::Auto {
            probe()
        } else {
            Capability::None
        };
        self.resolved(capability, reports_release)
    }

    /// Resolve every `Auto` choice against what the terminal supports.
    ///
    /// `Explicit` release needs key-up events; without them it falls back to
    /// `Synthetic` so keys cannot stay held forever.
    pub fn resolved(self, capability: Capability, reports_release: bool) -> Self {
        let release = match self.release.resolve(reports_release) {
            ReleaseStrategy::Explicit if !reports_release => {
                log::warn!("terminal does not report key releases, using synthetic release");
                ReleaseStrategy::Synthetic
            }
            release => release,
        };
        Self {
            render_mode: self.render_mode.resolve(capability),
            release,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_rate() {
        let config = Config::default();
        assert_eq!(config.ticks_per_second, 35);
        assert_eq!(config.key_release, Duration::from_millis(150));
        assert!(config.show_footer);
    }

    #[test]
    fn resolved_replaces_auto_only() {
        let config = Config::default().resolved(Capability::Kitty, false);
        assert_eq!(config.render_mode, RenderMode::Kitty);
        assert_eq!(config.release, ReleaseStrategy::Synthetic);

        let config = Config {
            render_mode: RenderMode::HalfBlock,
            release: ReleaseStrategy::Explicit,
            ..Config::default()
        }
        .resolved(Capability::Iterm2, true);
        assert_eq!(config.render_mode, RenderMode::HalfBlock);
        assert_eq!(config.release, ReleaseStrategy::Explicit);
    }

    #[test]
    fn explicit_mode_skips_probe() {
        let config = Config {
            render_mode: RenderMode::Iterm2,
            ..Config::default()
        }
        .resolved_with(|| panic!("probed with an explicit mode"), true);
        assert_eq!(config.render_mode, RenderMode::Iterm2);
        assert_eq!(config.release, ReleaseStrategy::Explicit);

        let mut probed = false;
        let config = Config::default().resolved_with(
            || {
                probed = true;
                Capability::Kitty
            },
            false,
        );
        assert!(probed);
        assert_eq!(config.render_mode, RenderMode::Kitty);
    }

    #[test]
    fn explicit_release_without_key_up_falls_back_to_synthetic() {
        let config = Config {
            release: ReleaseStrategy::Explicit,
            ..Config::default()
        }
        .resolved(Capability::None, false);
        assert_eq!(config.release, ReleaseStrategy::Synthetic);
        assert_eq!(config.render_mode, RenderMode::HalfBlock);
    }
}
