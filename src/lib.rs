//! Chomper (workspace facade crate).
//!
//! This package keeps a stable `chomper::{core,gfx,input,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use chomper_core as core;
pub use chomper_gfx as gfx;
pub use chomper_input as input;
pub use chomper_types as types;
