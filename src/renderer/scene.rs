//! Frame contents: what to draw, where, and in which color
//!
//! Building the draw list is independent of the GPU so it can be tested
//! without a device.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::vertex::{QuadKind, colors};
use crate::sim::World;

/// One positioned, colored quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub kind: QuadKind,
    pub offset: Vec2,
    pub color: [f32; 3],
}

impl DrawCommand {
    /// Uniform values for this draw
    pub fn uniforms(&self) -> DrawUniforms {
        DrawUniforms {
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            color_r: self.color[0],
            color_g: self.color[1],
            color_b: self.color[2],
            _pad: [0.0; 3],
        }
    }
}

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

/// Per-draw uniform block
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub offset_x: f32, // offset 0
    pub offset_y: f32, // offset 4
    pub color_r: f32,  // offset 8
    pub color_g: f32,  // offset 12
    pub color_b: f32,  // offset 16
    _pad: [f32; 3],    // pad to 32 bytes
}

/// Draws for one frame: paddle, ball, then every live block in row-major order
pub fn draw_list(world: &World) -> Vec<DrawCommand> {
    let mut draws = Vec::with_capacity(2 + world.blocks.live_count());

    draws.push(DrawCommand {
        kind: QuadKind::Paddle,
        offset: world.paddle.offset,
        color: colors::PADDLE,
    });
    draws.push(DrawCommand {
        kind: QuadKind::Ball,
        offset: world.ball.offset,
        color: colors::BALL,
    });

    draws.extend(
        world
            .blocks
            .live_cells()
            .map(|(row, _col, offset)| DrawCommand {
                kind: QuadKind::Block,
                offset,
                color: colors::block_row(row),
            }),
    );

    draws
}
