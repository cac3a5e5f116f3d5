//! wgpu rendering module
//!
//! Every object is one of three prototype quads, moved and colored per draw
//! through uniforms.

pub mod pipeline;
pub mod scene;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, draw_list};
pub use vertex::QuadKind;
