//! Game world and core simulation types
//!
//! Everything the simulation step reads or writes lives in [`World`]. The
//! game loop owns exactly one of these for the lifetime of the process.

use glam::Vec2;

use super::grid::BlockGrid;
use super::rect::{Bounds, Rect};
use crate::consts::*;
use crate::settings::Settings;

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub shape: Rect,
    /// Only the x component changes after startup
    pub offset: Vec2,
    /// Horizontal movement per frame
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            shape: PLAYER_SHAPE,
            offset: Vec2::new(PLAYER_START_OFFSET_X, PLAYER_OFFSET_Y),
            speed: PLAYER_SPEED,
        }
    }
}

impl Paddle {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.shape.bounds_at(self.offset)
    }

    /// Smallest x-offset that keeps the left edge on screen
    fn min_offset_x(&self) -> f32 {
        -1.0 - self.shape.x
    }

    /// Largest x-offset that keeps the right edge on screen
    fn max_offset_x(&self) -> f32 {
        1.0 - self.shape.x - self.shape.width
    }

    /// Move one frame to the left, stopping at the screen edge
    pub fn move_left(&mut self) {
        if self.offset.x + self.shape.x > -1.0 {
            self.offset.x = (self.offset.x - self.speed).max(self.min_offset_x());
        }
    }

    /// Move one frame to the right, stopping at the screen edge
    pub fn move_right(&mut self) {
        if self.offset.x + self.shape.x + self.shape.width < 1.0 {
            self.offset.x = (self.offset.x + self.speed).min(self.max_offset_x());
        }
    }
}

/// The ball
///
/// Speed components are magnitudes. Direction comes from the two reverse
/// flags, which persist across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub shape: Rect,
    pub offset: Vec2,
    pub speed: Vec2,
    /// Moving left when set
    pub reverse_x: bool,
    /// Moving up when set
    pub reverse_y: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            shape: BALL_SHAPE,
            offset: Vec2::ZERO,
            speed: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),
            reverse_x: false,
            reverse_y: false,
        }
    }
}

impl Ball {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.shape.bounds_at(self.offset)
    }

    /// Move by one frame along the current direction flags
    pub fn integrate(&mut self) {
        self.offset.x += if self.reverse_x {
            -self.speed.x
        } else {
            self.speed.x
        };
        // Vertical sign is inverted relative to horizontal: reverse_y moves up
        self.offset.y -= if self.reverse_y {
            -self.speed.y
        } else {
            self.speed.y
        };
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct World {
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: BlockGrid,
}

impl World {
    /// Create a world with speeds taken from settings
    pub fn new(settings: &Settings) -> Self {
        let mut world = Self::default();
        world.paddle.speed = settings.paddle_speed;
        world.ball.speed = settings.ball_speed;
        world
    }

    /// True once every block has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.blocks.live_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world_layout() {
        let world = World::default();
        let paddle = world.paddle.bounds();
        assert!((paddle.left - -0.125).abs() < 1e-6);
        assert!((paddle.bottom - -0.9).abs() < 1e-6);
        assert_eq!(world.ball.offset, Vec2::ZERO);
        assert!(!world.ball.reverse_x);
        assert!(!world.ball.reverse_y);
        assert!(!world.is_cleared());
    }

    #[test]
    fn test_world_from_settings() {
        let settings = Settings {
            paddle_speed: 0.05,
            ball_speed: Vec2::new(0.002, 0.003),
            ..Default::default()
        };
        let world = World::new(&settings);
        assert_eq!(world.paddle.speed, 0.05);
        assert_eq!(world.ball.speed, Vec2::new(0.002, 0.003));
    }

    #[test]
    fn test_paddle_stops_at_left_edge() {
        let mut paddle = Paddle::default();
        for _ in 0..200 {
            paddle.move_left();
        }
        assert!((paddle.bounds().left - -1.0).abs() < 1e-6);

        // Further presses are ignored
        paddle.move_left();
        assert!(paddle.bounds().left >= -1.0);
    }

    #[test]
    fn test_paddle_stops_at_right_edge() {
        let mut paddle = Paddle::default();
        for _ in 0..200 {
            paddle.move_right();
        }
        assert!((paddle.bounds().right - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_moves_by_speed() {
        let mut paddle = Paddle::default();
        let start = paddle.offset.x;
        paddle.move_left();
        assert!((paddle.offset.x - (start - PLAYER_SPEED)).abs() < 1e-6);
        paddle.move_right();
        assert!((paddle.offset.x - start).abs() < 1e-6);
    }

    #[test]
    fn test_ball_integration_signs() {
        let mut ball = Ball::default();
        ball.integrate();
        // Default direction: right and down
        assert!((ball.offset.x - BALL_SPEED_X).abs() < 1e-6);
        assert!((ball.offset.y - -BALL_SPEED_Y).abs() < 1e-6);

        let mut ball = Ball {
            reverse_x: true,
            reverse_y: true,
            ..Default::default()
        };
        ball.integrate();
        assert!((ball.offset.x - -BALL_SPEED_X).abs() < 1e-6);
        assert!((ball.offset.y - BALL_SPEED_Y).abs() < 1e-6);
    }
}
