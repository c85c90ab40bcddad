//! Press/release pairing for engines that expect explicit key-up events.
//!
//! Two strategies, chosen once per session:
//!
//! - **Synthetic**: the terminal only reports key-down. Every token is an
//!   immediate press and a release is scheduled `release_delay` later. A
//!   repeat of the same token before that deadline pushes the deadline out
//!   instead of pressing again, so auto-repeat reads as one held key.
//! - **Explicit**: the terminal reports releases; they are forwarded as-is.
//!
//! Deadlines are plain `Instant`s polled by the frame loop via
//! [`InputHandler::expire`], so there are no timer handles to cancel.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::map::{translate, KeyCodes, MAX_CODES_PER_TOKEN};
use crate::types::{ReleaseStrategy, KEY_RELEASE_MS};

/// One key transition for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyTransition {
    pub pressed: bool,
    pub code: u8,
}

impl KeyTransition {
    pub const fn press(code: u8) -> Self {
        Self {
            pressed: true,
            code,
        }
    }

    pub const fn release(code: u8) -> Self {
        Self {
            pressed: false,
            code,
        }
    }
}

/// Transitions caused by a single token.
pub type TokenTransitions = ArrayVec<KeyTransition, MAX_CODES_PER_TOKEN>;

#[derive(Debug, Clone)]
struct Held {
    codes: KeyCodes,
    /// `None` while waiting for an explicit release.
    release_at: Option<Instant>,
}

/// Tracks which tokens are currently held.
///
/// Invariant: at most one entry (and so at most one pending release) per token.
#[derive(Debug, Clone)]
pub struct InputHandler {
    strategy: ReleaseStrategy,
    release_delay: Duration,
    held: HashMap<String, Held>,
}

impl InputHandler {
    /// Create a handler. `Auto` is treated as `Synthetic`; resolve it against
    /// the terminal first to get explicit releases.
    pub fn new(strategy: ReleaseStrategy) -> Self {
        Self {
            strategy: strategy.resolve(false),
            release_delay: Duration::from_millis(KEY_RELEASE_MS),
            held: HashMap::new(),
        }
    }

    pub fn with_release_delay(mut self, delay: Duration) -> Self {
        self.release_delay = delay;
        self
    }

    pub fn strategy(&self) -> ReleaseStrategy {
        self.strategy
    }

    pub fn release_delay(&self) -> Duration {
        self.release_delay
    }

    /// A key-down for `token` arrived at `now`.
    pub fn press(&mut self, token: &str, now: Instant) -> TokenTransitions {
        let mut out = TokenTransitions::new();
        let release_at = match self.strategy {
            ReleaseStrategy::Explicit => None,
            _ => Some(now + self.release_delay),
        };

        if let Some(held) = self.held.get_mut(token) {
            // Already down: coalesce into one continuous hold.
            if release_at.is_some() {
                held.release_at = release_at;
            }
            return out;
        }

        let codes = translate(token);
        if codes.is_empty() {
            return out;
        }
        for &code in &codes {
            out.push(KeyTransition::press(code));
        }
        self.held
            .insert(token.to_string(), Held { codes, release_at });
        out
    }

    /// A key-up for `token` was reported by the terminal.
    ///
    /// Falls back to any held token with the same key codes, since modifiers
    /// may differ between the press and the release (`W` down, `w` up).
    pub fn release(&mut self, token: &str) -> TokenTransitions {
        let held = match self.held.remove(token) {
            Some(held) => Some(held),
            None => {
                let codes = translate(token);
                let key = self
                    .held
                    .iter()
                    .find(|(_, h)| !codes.is_empty() && h.codes == codes)
                    .map(|(k, _)| k.clone());
                key.and_then(|k| self.held.remove(&k))
            }
        };

        let mut out = TokenTransitions::new();
        if let Some(held) = held {
            for &code in &held.codes {
                out.push(KeyTransition::release(code));
            }
        }
        out
    }

    /// Release every token whose deadline is at or before `now`, earliest first.
    pub fn expire(&mut self, now: Instant) -> Vec<KeyTransition> {
        let mut due: Vec<(Instant, String)> = self
            .held
            .iter()
            .filter_map(|(token, held)| match held.release_at {
                Some(at) if at <= now => Some((at, token.clone())),
                _ => None,
            })
            .collect();
        due.sort();

        let mut out = Vec::new();
        for (_, token) in due {
            if let Some(held) = self.held.remove(&token) {
                out.extend(held.codes.iter().map(|&c| KeyTransition::release(c)));
            }
        }
        out
    }

    /// Earliest pending synthetic release.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.held.values().filter_map(|h| h.release_at).min()
    }

    /// Release everything immediately (shutdown).
    pub fn release_all(&mut self) -> Vec<KeyTransition> {
        self.held
            .drain()
            .flat_map(|(_, held)| held.codes.into_iter().map(KeyTransition::release))
            .collect()
    }

    pub fn is_held(&self, token: &str) -> bool {
        self.held.contains_key(token)
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(ReleaseStrategy::Synthetic)
    }
}
