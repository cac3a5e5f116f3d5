//! Vertex types and the shared quad geometry

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::consts::{BALL_SHAPE, BLOCK_SHAPE, PLAYER_SHAPE};
use crate::sim::Rect;

/// 2D vertex, position only; color comes from per-draw uniforms
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vertices per quad (one triangle strip)
pub const QUAD_VERTICES: u32 = 4;

/// Which prototype quad a draw uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadKind {
    Paddle,
    Ball,
    Block,
}

impl QuadKind {
    /// Slot of this quad in the shared vertex buffer
    const fn slot(self) -> u32 {
        match self {
            QuadKind::Paddle => 0,
            QuadKind::Ball => 1,
            QuadKind::Block => 2,
        }
    }

    /// Vertex range to draw for this quad
    pub const fn vertex_range(self) -> Range<u32> {
        let start = self.slot() * QUAD_VERTICES;
        start..start + QUAD_VERTICES
    }
}

fn strip(rect: &Rect) -> [Vertex; 4] {
    rect.strip_corners().map(|corner| Vertex::new(corner.x, corner.y))
}

/// Paddle, ball and block strips packed back to back
pub fn quad_geometry() -> Vec<Vertex> {
    [PLAYER_SHAPE, BALL_SHAPE, BLOCK_SHAPE]
        .iter()
        .flat_map(strip)
        .collect()
}

/// Colors for game elements (RGB)
pub mod colors {
    pub const PADDLE: [f32; 3] = [0.1, 0.2, 1.0];
    pub const BALL: [f32; 3] = [1.0, 1.0, 1.0];
    pub const BLOCK_RED: [f32; 3] = [1.0, 0.0, 0.0];
    pub const BLOCK_YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
    pub const BLOCK_GREEN: [f32; 3] = [0.0, 1.0, 0.0];
    pub const BLOCK_DEFAULT: [f32; 3] = [1.0, 1.0, 1.0];
    pub const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;

    /// Block color for a grid row: two rows per band
    pub const fn block_row(row: usize) -> [f32; 3] {
        match row {
            0 | 1 => BLOCK_RED,
            2 | 3 => BLOCK_YELLOW,
            4 | 5 => BLOCK_GREEN,
            _ => BLOCK_DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_ranges_are_contiguous() {
        assert_eq!(QuadKind::Paddle.vertex_range(), 0..4);
        assert_eq!(QuadKind::Ball.vertex_range(), 4..8);
        assert_eq!(QuadKind::Block.vertex_range(), 8..12);
    }

    #[test]
    fn test_quad_geometry_layout() {
        let vertices = quad_geometry();
        assert_eq!(vertices.len(), 12);
        // Paddle strip starts at its prototype corner
        assert_eq!(vertices[0], Vertex::new(-1.0, -1.0));
        // Ball strip starts at its prototype corner
        assert_eq!(vertices[4], Vertex::new(-0.02, -0.02));
        // Block strip starts at its prototype corner
        assert_eq!(vertices[8], Vertex::new(-1.0, 1.0));
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
    }

    #[test]
    fn test_row_bands() {
        assert_eq!(colors::block_row(0), colors::BLOCK_RED);
        assert_eq!(colors::block_row(1), colors::BLOCK_RED);
        assert_eq!(colors::block_row(2), colors::BLOCK_YELLOW);
        assert_eq!(colors::block_row(3), colors::BLOCK_YELLOW);
        assert_eq!(colors::block_row(4), colors::BLOCK_GREEN);
        assert_eq!(colors::block_row(5), colors::BLOCK_GREEN);
        assert_eq!(colors::block_row(6), colors::BLOCK_DEFAULT);
    }
}
