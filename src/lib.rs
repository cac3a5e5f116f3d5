//! Breakout - paddle, ball and a wall of blocks
//!
//! Core modules:
//! - `sim`: Per-frame simulation (geometry, block grid, collisions)
//! - `input`: Keyboard state to paddle intent
//! - `renderer`: wgpu quad pipeline driven by per-draw uniforms
//! - `settings`: Tunables loaded from a JSON file
//! - `app`: Window, event loop and frame orchestration

pub mod app;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// All coordinates are normalized device coordinates, so the playfield spans
/// [-1, 1] on both axes.
pub mod consts {
    use crate::sim::Rect;

    /// Window defaults
    pub const WINDOW_TITLE: &str = "Breakout";
    pub const WINDOW_WIDTH: u32 = 600;
    pub const WINDOW_HEIGHT: u32 = 600;

    /// Paddle prototype shape (bottom-left corner of the screen)
    pub const PLAYER_SHAPE: Rect = Rect::new(-1.0, -1.0, 0.3, 0.05);
    /// Paddle starts roughly centered, lifted off the bottom edge
    pub const PLAYER_START_OFFSET_X: f32 = 1.0 - (0.25 / 2.0);
    pub const PLAYER_OFFSET_Y: f32 = 0.1;
    /// Paddle movement per frame while a direction key is held
    pub const PLAYER_SPEED: f32 = 0.02;

    /// Ball prototype shape (centered on the origin)
    pub const BALL_SHAPE: Rect = Rect::new(-0.02, -0.02, 0.04, 0.04);
    /// Ball movement magnitudes per frame
    pub const BALL_SPEED_X: f32 = 0.007;
    pub const BALL_SPEED_Y: f32 = 0.01;

    /// Block prototype shape (top-left corner of the screen), shared by every block
    pub const BLOCK_SHAPE: Rect = Rect::new(-1.0, 1.0, 0.2, 0.05);

    /// Block grid dimensions
    pub const GRID_ROWS: usize = 6;
    pub const GRID_COLS: usize = 9;
    /// Vertical distance between block rows
    pub const GRID_STEP_Y: f32 = 0.1;
    /// Horizontal inset of the first column
    pub const GRID_MARGIN_X: f32 = 0.01;
    /// Vertical gap between the top of the screen and the first row
    pub const GRID_MARGIN_Y: f32 = 0.1;

    /// Offset written to a block's x coordinate once it is destroyed
    pub const DESTROYED_OFFSET: f32 = -2.0;
}
