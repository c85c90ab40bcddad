//! Terminal graphics capability detection.
//!
//! Pure function of the environment: no escape-sequence queries, no I/O.
//! The result is computed once per session.

use crate::types::Capability;

/// Detect the capability of the terminal attached to this process.
pub fn detect() -> Capability {
    let capability = detect_with(|key| std::env::var(key).ok());
    log::info!("terminal graphics capability: {}", capability.as_str());
    capability
}

/// Detect from an arbitrary environment lookup.
///
/// `env` returns the value of a variable, or `None` when unset.
pub fn detect_with<F>(env: F) -> Capability
where
    F: Fn(&str) -> Option<String>,
{
    let term = env("TERM").unwrap_or_default().to_lowercase();
    let program = env("TERM_PROGRAM").unwrap_or_default().to_lowercase();

    // Multiplexers swallow APC/OSC sequences unless passthrough is configured,
    // and they forward the outer terminal's markers into their panes.
    if env("TMUX").is_some() || term.starts_with("screen") || term.starts_with("tmux") {
        return Capability::None;
    }

    if env("KITTY_WINDOW_ID").is_some()
        || term.contains("kitty")
        || term.contains("ghostty")
        || program == "kitty"
        || program == "ghostty"
        || program == "wezterm"
        || env("GHOSTTY_RESOURCES_DIR").is_some()
        || env("WEZTERM_EXECUTABLE").is_some()
        || env("KONSOLE_VERSION").is_some()
    {
        return Capability::Kitty;
    }

    if program == "iterm.app"
        || env("ITERM_SESSION_ID").is_some()
        || env("LC_TERMINAL").is_some_and(|v| v == "iTerm2")
    {
        return Capability::Iterm2;
    }

    Capability::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_has_no_graphics() {
        assert_eq!(detect_with(env_of(&[])), Capability::None);
    }

    #[test]
    fn kitty_markers() {
        assert_eq!(
            detect_with(env_of(&[("TERM", "xterm-kitty")])),
            Capability::Kitty
        );
        assert_eq!(
            detect_with(env_of(&[("KITTY_WINDOW_ID", "1"), ("TERM", "xterm-256color")])),
            Capability::Kitty
        );
        assert_eq!(
            detect_with(env_of(&[("TERM", "xterm-ghostty")])),
            Capability::Kitty
        );
        assert_eq!(
            detect_with(env_of(&[("TERM_PROGRAM", "WezTerm")])),
            Capability::Kitty
        );
    }

    #[test]
    fn iterm_markers() {
        assert_eq!(
            detect_with(env_of(&[("TERM_PROGRAM", "iTerm.app")])),
            Capability::Iterm2
        );
        assert_eq!(
            detect_with(env_of(&[("LC_TERMINAL", "iTerm2")])),
            Capability::Iterm2
        );
    }

    #[test]
    fn multiplexer_disables_graphics() {
        assert_eq!(
            detect_with(env_of(&[("TMUX", "/tmp/tmux-1000/default,1,0"), ("KITTY_WINDOW_ID", "3")])),
            Capability::None
        );
        assert_eq!(
            detect_with(env_of(&[("TERM", "screen-256color"), ("TERM_PROGRAM", "iTerm.app")])),
            Capability::None
        );
    }

    #[test]
    fn plain_xterm_has_no_graphics() {
        assert_eq!(
            detect_with(env_of(&[("TERM", "xterm-256color"), ("COLORTERM", "truecolor")])),
            Capability::None
        );
    }
}
