//! Continuous position to grid cell projection.

use chomper_types::{Tile, Vec2};

/// Map a continuous position to the tile it falls in.
///
/// Both components are truncated toward zero, not floored, so every
/// position within one tile size left of or above the window still maps
/// to column/row 0. The HUD readout depends on this exact behavior for
/// off-screen positions.
pub fn tile_at(pos: Vec2, tile_size: f32) -> Tile {
    Tile {
        col: (pos.x / tile_size) as i32,
        row: (pos.y / tile_size) as i32,
    }
}
