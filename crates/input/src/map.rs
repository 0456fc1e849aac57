//! Key-held state to steering intent.

use chomper_types::Heading;
use macroquad::input::{is_key_down, KeyCode};

/// Sample the currently held movement keys into a steering intent.
///
/// Both WASD and the arrow keys steer.
pub fn held_heading() -> Option<Heading> {
    heading_from_keys(
        is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
    )
}

/// Reduce held movement keys to a heading.
///
/// Priority order is up, down, left, right; the first held key wins and
/// the rest are ignored for the frame. No key held means no intent.
pub fn heading_from_keys(up: bool, down: bool, left: bool, right: bool) -> Option<Heading> {
    if up {
        Some(Heading::Up)
    } else if down {
        Some(Heading::Down)
    } else if left {
        Some(Heading::Left)
    } else if right {
        Some(Heading::Right)
    } else {
        None
    }
}
