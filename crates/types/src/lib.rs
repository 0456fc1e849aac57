//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Window dimensions in pixels (34 tiles * 24 pixels per tile)
pub const WINDOW_WIDTH: f32 = 816.0;
pub const WINDOW_HEIGHT: f32 = 816.0;

/// Grid geometry
pub const TILE_SIZE: f32 = 24.0;
pub const GRID_COLS: i32 = 34;
pub const GRID_ROWS: i32 = 34;

/// Player geometry and movement (pixels, pixels per frame)
pub const PLAYER_RADIUS: f32 = 12.0;
pub const PLAYER_SPEED: f32 = PLAYER_RADIUS / 3.0;

/// Mouth animation (degrees, degrees per frame)
pub const MOUTH_MIN_DEG: f32 = 5.0;
pub const MOUTH_MAX_DEG: f32 = 45.0;
pub const MOUTH_STEP_DEG: f32 = 10.0;

/// Frame budget for the ~60 FPS cap (milliseconds)
pub const FRAME_MS: u64 = 16;

/// HUD placement and font
pub const HUD_MARGIN_PX: f32 = 10.0;
pub const FONT_POINT_SIZE: u16 = 24;
pub const FONT_PATH: &str = "font.ttf";

/// 2D vector in screen space (x right, y down).
///
/// Used both for continuous pixel positions and for axis-aligned unit
/// directions; the steering code only ever produces the four axis
/// directions or zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Grid cell coordinate derived from a continuous position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub col: i32,
    pub row: i32,
}

/// One of the four axis-aligned movement headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit direction vector in screen coordinates (y grows downward).
    pub const fn direction(self) -> Vec2 {
        match self {
            Heading::Up => Vec2::new(0.0, -1.0),
            Heading::Down => Vec2::new(0.0, 1.0),
            Heading::Left => Vec2::new(-1.0, 0.0),
            Heading::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Facing angle in degrees (0 = right, 90 = down, standard screen axes).
    pub const fn facing_deg(self) -> f32 {
        match self {
            Heading::Up => -90.0,
            Heading::Down => 90.0,
            Heading::Left => 180.0,
            Heading::Right => 0.0,
        }
    }
}

/// Immutable runtime configuration, constructed once at startup.
///
/// Defaults reproduce the fixed tuning constants above; nothing mutates a
/// `Config` after `main` builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub tile_size: f32,
    pub player_radius: f32,
    pub player_speed: f32,
    pub mouth_step_deg: f32,
    pub font_path: String,
    pub font_point_size: u16,
    pub hud_margin_px: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tile_size: TILE_SIZE,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            mouth_step_deg: MOUTH_STEP_DEG,
            font_path: FONT_PATH.to_string(),
            font_point_size: FONT_POINT_SIZE,
            hud_margin_px: HUD_MARGIN_PX,
        }
    }
}
