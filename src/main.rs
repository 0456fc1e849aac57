//! Chomper runner (default binary).
//!
//! A single Pac-Man-style actor roams a fixed 34x34 tile grid under
//! keyboard control, wrapping at the window edges, with a HUD readout of
//! its position and tile. One synchronous loop per frame: steer, move,
//! wrap, draw, present, then sleep off the rest of the 16ms budget.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use log::{error, info};
use macroquad::prelude::*;

use chomper::core::{tile_at, Player};
use chomper::gfx::{hud, scene};
use chomper::input::held_heading;
use chomper::types::{Config, Vec2, FRAME_MS, GRID_COLS, GRID_ROWS, WINDOW_HEIGHT, WINDOW_WIDTH};

fn window_conf() -> Conf {
    Conf {
        window_title: "Chomper".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        error!("failed to initialize: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::default();

    // The font file is resolved relative to the working directory; losing
    // it is fatal.
    let font = load_ttf_font(&config.font_path)
        .await
        .map_err(|err| anyhow!("failed to load font {:?}: {:?}", config.font_path, err))?;

    info!(
        "window {}x{}, {}x{} grid of {}px tiles, {}ms frame budget",
        config.window_width, config.window_height, GRID_COLS, GRID_ROWS, config.tile_size, FRAME_MS
    );

    // Observe the quit request ourselves so the loop exits cleanly.
    prevent_quit();

    let mut player = Player::new(Vec2::new(
        config.window_width / 2.0,
        config.window_height / 2.0,
    ));
    let frame_budget = Duration::from_millis(FRAME_MS);

    loop {
        let frame_start = Instant::now();

        if is_quit_requested() {
            return Ok(());
        }

        player.steer(held_heading());
        player.advance(config.player_speed);
        player.wrap(
            config.window_width,
            config.window_height,
            config.player_radius,
        );

        scene::clear();
        scene::draw_grid(&config);
        scene::draw_player(&player, &config);

        player.mouth.step(config.mouth_step_deg);

        let tile = tile_at(player.pos, config.tile_size);
        hud::draw(&font, &hud::status_line(player.pos, tile), &config);

        // Cap at ~60 FPS.
        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
        next_frame().await;
    }
}
