//! GPU device management.
//!
//! Creates the wgpu adapter/device/queue without a window, hands out
//! offscreen color targets, and reads rendered pixels back.

mod gpu;

pub use gpu::{Gpu, GpuInit, OffscreenTarget};
