//! Background, grid, and player drawing.

use chomper_core::{disc_with_mouth, Player};
use chomper_types::Config;
use macroquad::prelude::*;

pub const BACKGROUND: Color = BLACK;
pub const GRID_LINE: Color = WHITE;
pub const PLAYER_BODY: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Clear the frame to the background color.
pub fn clear() {
    clear_background(BACKGROUND);
}

/// Draw the tile grid across the whole window, both edges included.
pub fn draw_grid(config: &Config) {
    let mut x = 0.0;
    while x <= config.window_width {
        draw_line(x, 0.0, x, config.window_height, 1.0, GRID_LINE);
        x += config.tile_size;
    }

    let mut y = 0.0;
    while y <= config.window_height {
        draw_line(0.0, y, config.window_width, y, 1.0, GRID_LINE);
        y += config.tile_size;
    }
}

/// Rasterize the player into the current frame, one pixel at a time.
pub fn draw_player(player: &Player, config: &Config) {
    disc_with_mouth(
        player.pos,
        config.player_radius,
        player.mouth.angle_deg(),
        player.facing_deg,
        |x, y| draw_rectangle(x as f32, y as f32, 1.0, 1.0, PLAYER_BODY),
    );
}
