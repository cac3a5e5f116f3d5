//! Property tests for the simulation step

use std::collections::HashSet;

use breakout::consts::*;
use breakout::sim::{TickInput, World, step, tick};
use glam::Vec2;
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>()).prop_map(|(move_left, move_right)| TickInput {
            move_left,
            move_right,
            quit: false,
        }),
        0..400,
    )
}

proptest! {
    #[test]
    fn paddle_stays_on_screen(inputs in inputs()) {
        let mut world = World::default();
        for input in &inputs {
            tick(&mut world, input);
            let bounds = world.paddle.bounds();
            prop_assert!(bounds.left >= -1.0 - 1e-6, "left edge {}", bounds.left);
            prop_assert!(bounds.right <= 1.0 + 1e-6, "right edge {}", bounds.right);
        }
    }

    #[test]
    fn bottom_wall_sends_ball_up(
        x in -0.9f32..0.9,
        below in 0.0001f32..0.05,
        reverse_x in any::<bool>(),
        reverse_y in any::<bool>(),
    ) {
        let mut world = World::default();
        // Ball bottom edge = offset.y + BALL_SHAPE.y
        world.ball.offset = Vec2::new(x, -1.0 - below - BALL_SHAPE.y);
        world.ball.reverse_x = reverse_x;
        world.ball.reverse_y = reverse_y;

        step(&mut world);
        prop_assert!(world.ball.reverse_y);
    }

    #[test]
    fn destroyed_blocks_stay_destroyed(
        x in -0.95f32..0.95,
        y in 0.3f32..0.95,
        reverse_x in any::<bool>(),
        reverse_y in any::<bool>(),
        frames in 1usize..600,
    ) {
        let mut world = World::default();
        world.ball.offset = Vec2::new(x, y);
        world.ball.reverse_x = reverse_x;
        world.ball.reverse_y = reverse_y;

        let mut gone: HashSet<(usize, usize)> = HashSet::new();
        let mut live = world.blocks.live_count();

        for _ in 0..frames {
            let report = step(&mut world);

            // At most one block per row per frame
            let rows: HashSet<usize> = report.destroyed.iter().map(|(row, _)| *row).collect();
            prop_assert_eq!(rows.len(), report.destroyed.len());

            for cell in &report.destroyed {
                prop_assert!(gone.insert(*cell), "block {:?} destroyed twice", cell);
            }
            for &(row, col) in &gone {
                prop_assert!(!world.blocks.is_live(row, col));
                prop_assert_eq!(world.blocks.offset(row, col).x, DESTROYED_OFFSET);
            }

            // Live count only goes down, by exactly the blocks destroyed
            prop_assert_eq!(report.live_blocks, live - report.destroyed.len());
            live = report.live_blocks;

            // Speed magnitudes are untouched
            prop_assert_eq!(world.ball.speed, Vec2::new(BALL_SPEED_X, BALL_SPEED_Y));

            if report.cleared() {
                break;
            }
        }
    }
}
