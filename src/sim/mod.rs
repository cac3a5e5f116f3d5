//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame increments only
//! - Stable iteration order (row-major over the block grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{resolve_blocks, resolve_paddle, resolve_walls};
pub use grid::{BlockGrid, is_live_offset, lattice_offset};
pub use rect::{Bounds, Rect};
pub use state::{Ball, Paddle, World};
pub use tick::{StepReport, TickInput, apply_input, step, tick};
