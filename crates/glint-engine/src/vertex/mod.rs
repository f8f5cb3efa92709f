//! Interleaved vertex data.
//!
//! A [`VertexBuffer`] is the CPU-side description of one interleaved `f32`
//! buffer: the payload plus the attribute layout computed from declaration
//! order. Nothing here touches the GPU; see `render::GpuVertexBuffer` for the
//! upload.

mod buffer;
mod error;
mod layout;

pub use buffer::{BufferUsage, VertexBuffer};
pub use error::BufferError;
pub use layout::{AttributeDescriptor, VertexBufferBuilder};
