//! Terminal input module (engine-facing).
//!
//! Maps raw terminal tokens into the engine's key-code space and pairs every
//! press with a release, including on terminals that never report key-up.

pub mod handler;
pub mod key;
pub mod map;

pub use ttydoom_types as types;

pub use handler::{InputHandler, KeyTransition, TokenTransitions};
pub use key::token_from_key;
pub use map::{should_quit, translate, KeyCodes, INTERRUPT, MAX_CODES_PER_TOKEN};
