//! Block grid: a fixed lattice of block offsets
//!
//! Each cell stores the offset added to the shared block shape. A cell's
//! x-offset doubles as its liveness flag: anything below -1 is off-screen and
//! means the block is gone. Once a cell is destroyed it stays destroyed.

use glam::Vec2;

use super::rect::{Bounds, Rect};
use crate::consts::*;

/// Returns true if this offset belongs to a block that is still standing
#[inline]
pub fn is_live_offset(offset: Vec2) -> bool {
    offset.x >= -1.0
}

/// Fixed-size grid of block offsets
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGrid {
    /// Shape shared by every block
    shape: Rect,
    cells: [[Vec2; GRID_COLS]; GRID_ROWS],
}

impl BlockGrid {
    /// Lay out a full grid for blocks of the given shape
    pub fn new(shape: Rect) -> Self {
        let mut cells = [[Vec2::ZERO; GRID_COLS]; GRID_ROWS];
        for (row, cells_in_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_in_row.iter_mut().enumerate() {
                *cell = lattice_offset(&shape, row, col);
            }
        }
        Self { shape, cells }
    }

    #[inline]
    pub fn shape(&self) -> &Rect {
        &self.shape
    }

    pub const fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub const fn cols(&self) -> usize {
        GRID_COLS
    }

    /// Offset of a cell (the destroyed sentinel included)
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> Vec2 {
        self.cells[row][col]
    }

    #[inline]
    pub fn is_live(&self, row: usize, col: usize) -> bool {
        is_live_offset(self.cells[row][col])
    }

    /// World-space edges of the block in a cell
    #[inline]
    pub fn bounds(&self, row: usize, col: usize) -> Bounds {
        self.shape.bounds_at(self.cells[row][col])
    }

    /// Mark a cell destroyed. Only the x-offset is overwritten.
    pub fn destroy(&mut self, row: usize, col: usize) {
        self.cells[row][col].x = DESTROYED_OFFSET;
    }

    /// Number of blocks still standing
    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|offset| is_live_offset(**offset))
            .count()
    }

    /// Live cells in row-major order as (row, col, offset)
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, Vec2)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, offset)| is_live_offset(**offset))
                .map(move |(col, offset)| (row, col, *offset))
        })
    }
}

impl Default for BlockGrid {
    fn default() -> Self {
        Self::new(BLOCK_SHAPE)
    }
}

/// Lattice position of a cell for blocks of the given shape
///
/// Columns are spaced by the block width plus a gap of `width / cols`; rows
/// are a fixed distance apart, starting below the top margin.
pub fn lattice_offset(shape: &Rect, row: usize, col: usize) -> Vec2 {
    let step_x = shape.width + (shape.width / GRID_COLS as f32);
    let x = (step_x * col as f32) + GRID_MARGIN_X;
    let y = -(GRID_STEP_Y * row as f32) - shape.height - GRID_MARGIN_Y;
    Vec2::new(x, y)
}
