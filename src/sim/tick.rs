//! Per-frame simulation tick
//!
//! One call advances the world by exactly one frame. There is no delta time:
//! movement is a fixed amount per frame, so game speed follows frame rate.

use super::collision::{resolve_blocks, resolve_paddle, resolve_walls};
use super::state::World;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow or A held
    pub move_left: bool,
    /// Right arrow or D held
    pub move_right: bool,
    /// Escape pressed
    pub quit: bool,
}

/// What happened during one simulation step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Blocks destroyed this step as (row, col)
    pub destroyed: Vec<(usize, usize)>,
    /// Blocks still standing after this step
    pub live_blocks: usize,
    /// The paddle was hit this step
    pub paddle_hit: bool,
}

impl StepReport {
    /// No blocks remain; the game is won
    pub fn cleared(&self) -> bool {
        self.live_blocks == 0
    }
}

/// Apply held movement keys to the paddle
pub fn apply_input(world: &mut World, input: &TickInput) {
    if input.move_left {
        world.paddle.move_left();
    }
    if input.move_right {
        world.paddle.move_right();
    }
}

/// Advance the ball and block grid by one frame
///
/// Order matters: walls, then paddle, then blocks, then the win check, then
/// movement. Ball edges are taken once up front and shared by every check.
pub fn step(world: &mut World) -> StepReport {
    let edges = world.ball.bounds();

    resolve_walls(&mut world.ball, &edges);
    let paddle_hit = resolve_paddle(&mut world.ball, &edges, &world.paddle);
    let destroyed = resolve_blocks(&mut world.ball, &edges, &mut world.blocks);

    let live_blocks = world.blocks.live_count();

    world.ball.integrate();

    StepReport {
        destroyed,
        live_blocks,
        paddle_hit,
    }
}

/// Apply input, then advance the simulation by one frame
pub fn tick(world: &mut World, input: &TickInput) -> StepReport {
    apply_input(world, input);
    step(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    #[test]
    fn test_tick_moves_ball_down_right() {
        let mut world = World::default();
        let report = tick(&mut world, &TickInput::default());

        assert!(report.destroyed.is_empty());
        assert!(!report.paddle_hit);
        assert_eq!(report.live_blocks, GRID_ROWS * GRID_COLS);
        assert!(!report.cleared());
        assert!(world.ball.offset.abs_diff_eq(Vec2::new(BALL_SPEED_X, -BALL_SPEED_Y), 1e-6));
    }

    #[test]
    fn test_tick_applies_input_before_step() {
        let mut world = World::default();
        let start = world.paddle.offset.x;
        let input = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut world, &input);
        assert!((world.paddle.offset.x - (start - PLAYER_SPEED)).abs() < 1e-6);

        // Both directions cancel out away from the edges
        let input = TickInput {
            move_left: true,
            move_right: true,
            quit: false,
        };
        let before = world.paddle.offset.x;
        tick(&mut world, &input);
        assert!((world.paddle.offset.x - before).abs() < 1e-6);
    }

    #[test]
    fn test_block_hit_from_left() {
        let mut world = World::default();
        // Ball right edge just past the left edge of block (0, 1), clear of (0, 0)
        world.ball.offset = Vec2::new(-0.765, 0.875);
        world.ball.reverse_x = false;
        world.ball.reverse_y = false;

        let report = step(&mut world);

        assert_eq!(report.destroyed, vec![(0, 1)]);
        assert!(world.ball.reverse_y);
        assert!(!world.ball.reverse_x);
        assert_eq!(world.blocks.offset(0, 1).x, DESTROYED_OFFSET);
        assert!(world.blocks.is_live(0, 0));
        assert_eq!(report.live_blocks, GRID_ROWS * GRID_COLS - 1);
    }

    #[test]
    fn test_paddle_center_hit_nudges_ball() {
        let mut world = World::default();
        world.ball.offset = Vec2::new(0.025, -0.87);
        world.ball.reverse_x = true;
        world.ball.reverse_y = false;

        let report = step(&mut world);

        assert!(report.paddle_hit);
        assert!(world.ball.reverse_x);
        assert!(world.ball.reverse_y);
        // One nudge out of the paddle plus the regular upward move
        let expected_y = -0.87 + 2.0 * BALL_SPEED_Y;
        assert!((world.ball.offset.y - expected_y).abs() < 1e-6);
        assert!((world.ball.offset.x - (0.025 - BALL_SPEED_X)).abs() < 1e-6);
    }

    #[test]
    fn test_bottom_wall_bounces_up() {
        let mut world = World::default();
        // Far from the paddle, bottom edge below the screen
        world.ball.offset = Vec2::new(-0.6, -0.99);

        step(&mut world);
        assert!(world.ball.reverse_y);
        assert!(world.ball.offset.y > -0.99);

        // Flag stays set while the ball climbs
        for _ in 0..10 {
            step(&mut world);
            assert!(world.ball.reverse_y);
        }
    }

    #[test]
    fn test_top_wall_sends_ball_down() {
        let mut world = World::default();
        // Above the first block row, top edge past the screen
        world.ball.offset = Vec2::new(0.0, 0.99);
        world.ball.reverse_y = true;

        step(&mut world);
        assert!(!world.ball.reverse_y);
        assert!(world.ball.offset.y < 0.99);
    }

    #[test]
    fn test_last_block_clears_same_step() {
        let mut world = World::default();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if (row, col) != (0, 1) {
                    world.blocks.destroy(row, col);
                }
            }
        }
        assert!(!world.is_cleared());

        world.ball.offset = Vec2::new(-0.765, 0.875);
        let report = step(&mut world);

        assert_eq!(report.destroyed, vec![(0, 1)]);
        assert!(report.cleared());
        assert!(world.is_cleared());
    }

    #[test]
    fn test_speed_magnitudes_never_change() {
        let mut world = World::default();
        let speed = world.ball.speed;
        for frame in 0..2_000 {
            let input = TickInput {
                move_left: frame % 300 < 150,
                move_right: frame % 300 >= 150,
                quit: false,
            };
            let report = tick(&mut world, &input);
            assert_eq!(world.ball.speed, speed);
            if report.cleared() {
                break;
            }
        }
    }
}
