//! Keyboard input module (frame-driver facing).
//!
//! Samples macroquad's key-held state once per frame and reduces it to a
//! steering intent. The reduction itself is a pure function over four
//! booleans so it can be tested without a window.

pub mod map;

pub use chomper_types as types;

pub use map::{heading_from_keys, held_heading};
