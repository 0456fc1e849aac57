//! Scene drawing and HUD on top of the macroquad backend.
//!
//! This crate is the only place (besides input sampling) that talks to the
//! backend. Everything that can be computed without a window lives in
//! `chomper-core`; the functions here plot the results.

pub mod hud;
pub mod scene;

pub use chomper_core as core;
pub use chomper_types as types;
