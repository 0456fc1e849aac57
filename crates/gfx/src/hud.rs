//! Position/tile HUD readout.

use chomper_types::{Config, Tile, Vec2};
use macroquad::prelude::*;

/// Compose the HUD status line from the truncated position and its tile.
pub fn status_line(pos: Vec2, tile: Tile) -> String {
    format!(
        "Pos: ({:03}, {:03}) Tile: ({:02}, {:02})",
        pos.x as i32, pos.y as i32, tile.col, tile.row
    )
}

/// Draw the status line right-aligned inside the top margin.
pub fn draw(font: &Font, text: &str, config: &Config) {
    let dims = measure_text(text, Some(font), config.font_point_size, 1.0);

    // draw_text_ex positions the baseline; offset_y moves it down so the
    // glyph tops sit at the margin.
    let x = config.window_width - dims.width - config.hud_margin_px;
    let y = config.hud_margin_px + dims.offset_y;

    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font: Some(font),
            font_size: config.font_point_size,
            color: WHITE,
            ..Default::default()
        },
    );
}
