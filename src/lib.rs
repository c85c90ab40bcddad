//! ttydoom (workspace facade crate).
//!
//! Exposes `ttydoom::{core,engine,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use ttydoom_core as core;
pub use ttydoom_engine as engine;
pub use ttydoom_input as input;
pub use ttydoom_term as term;
pub use ttydoom_types as types;
