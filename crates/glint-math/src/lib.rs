//! glint math crate.
//!
//! Fixed-arity vectors, column-major square matrices, a general rows × columns
//! matrix, and the model-view / projection stack used for hierarchical
//! transforms.
//!
//! Every binary operation comes in up to three flavours:
//! - an allocating form returning a new value (`a.add_vec(b)`, `a + b`)
//! - an `_into` form writing into a caller-supplied output and returning it
//! - an `_in_place` / `_assign` form mutating the receiver
//!
//! Floating-point domain problems (zero-length normalize, division by zero)
//! are not errors here; NaN and infinities propagate.

pub mod camera;
pub mod dyn_matrix;
pub mod error;
pub mod matrix;
pub mod stack;
pub mod vector;

pub use camera::Camera;
pub use dyn_matrix::DynMatrix;
pub use error::MathError;
pub use matrix::{Mat2, Mat3, Mat4, Matrix, SINGULAR_EPSILON};
pub use stack::{MatrixStack, SlotReuse};
pub use vector::{Vec2, Vec3, Vec4, Vector};

/// Bytes per `f32` component in GPU-facing buffers.
pub const FLOAT_BYTES: usize = core::mem::size_of::<f32>();
