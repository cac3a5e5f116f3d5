//! Collision detection and response for the ball
//!
//! All checks are axis-aligned box overlaps. Responses only touch the ball's
//! direction flags (and the paddle nudge); speed magnitudes never change.
//!
//! Every check takes the ball's edges as they were at the start of the frame.
//! Later checks may overwrite flags set by earlier ones.

use super::grid::BlockGrid;
use super::rect::Bounds;
use super::state::{Ball, Paddle};

/// Fraction of the paddle width used to decide a corner hit
const PADDLE_EDGE_DIVISOR: f32 = 1.5;

/// Bounce off the screen edges
///
/// Top and bottom set or clear the vertical flag. Left and right toggle the
/// horizontal flag.
pub fn resolve_walls(ball: &mut Ball, edges: &Bounds) {
    if edges.top > 1.0 {
        ball.reverse_y = false;
    }
    if edges.bottom < -1.0 {
        ball.reverse_y = true;
    }

    if edges.left < -1.0 {
        ball.reverse_x = !ball.reverse_x;
    }
    if edges.right > 1.0 {
        ball.reverse_x = !ball.reverse_x;
    }
}

/// Bounce off the paddle
///
/// A hit always sends the ball up and pushes it one extra vertical step out of
/// the paddle. Hits on the outer part of the paddle pick a horizontal
/// direction; a hit in the middle third keeps the current one.
///
/// Returns true on a hit.
pub fn resolve_paddle(ball: &mut Ball, edges: &Bounds, paddle: &Paddle) -> bool {
    let pad = paddle.bounds();
    if !edges.overlaps(&pad) {
        return false;
    }

    ball.reverse_y = true;

    let reach = pad.width() / PADDLE_EDGE_DIVISOR;
    if edges.right > pad.left + reach {
        ball.reverse_x = false;
    } else if edges.left < pad.right - reach {
        ball.reverse_x = true;
    }

    ball.offset.y += ball.speed.y;
    true
}

/// Break blocks the ball overlaps
///
/// Rows are scanned top to bottom. In each row the first live block that
/// overlaps the ball is destroyed and flips the vertical flag; the rest of
/// that row is skipped. Other rows are still checked, so several rows can
/// each lose one block in the same frame.
///
/// Returns the (row, col) of every block destroyed.
pub fn resolve_blocks(ball: &mut Ball, edges: &Bounds, blocks: &mut BlockGrid) -> Vec<(usize, usize)> {
    let mut destroyed = Vec::new();

    for row in 0..blocks.rows() {
        for col in 0..blocks.cols() {
            if !blocks.is_live(row, col) {
                continue;
            }

            if edges.overlaps(&blocks.bounds(row, col)) {
                ball.reverse_y = !ball.reverse_y;
                blocks.destroy(row, col);
                destroyed.push((row, col));
                break;
            }
        }
    }

    destroyed
}
