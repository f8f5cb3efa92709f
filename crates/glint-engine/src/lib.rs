//! glint engine crate.
//!
//! Vertex buffer layout, texture atlases, sprites, and the wgpu layer that
//! draws them. Math lives in `glint-math` and is re-exported as [`math`].

pub mod atlas;
pub mod device;
pub mod logging;
pub mod render;
pub mod sprite;
pub mod vertex;

pub use glint_math as math;
