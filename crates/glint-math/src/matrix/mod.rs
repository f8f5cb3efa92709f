//! Square column-major matrices.
//!
//! Storage is `[[f32; N]; N]` indexed `[column][row]`, which in memory is the
//! flat column-major layout the shader uploads expect: column `c`, row `r`
//! lives at flat index `c * N + r`.
//!
//! Aliasing: `_into` forms take `&self` and `&mut out`, so the borrow checker
//! rejects an output that aliases an input. The `_assign` / `_in_place` forms
//! compute the full result into a temporary before writing it back.

mod elimination;
mod mat2;
mod mat3;
mod mat4;
mod ops;

pub(crate) use elimination::{determinant_column_major, invert_column_major};

use crate::error::MathError;
use crate::vector::Vector;

/// Determinants with a magnitude below this are treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-6;

/// N × N matrix of `f32`, column-major.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize> {
    cols: [[f32; N]; N],
}

pub type Mat2 = Matrix<2>;
pub type Mat3 = Matrix<3>;
pub type Mat4 = Matrix<4>;

impl<const N: usize> Default for Matrix<N> {
    /// Identity. A freshly created matrix is always usable as a transform.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> Matrix<N> {
    pub const ROWS: usize = N;
    pub const COLUMNS: usize = N;

    pub const ZERO: Self = Self { cols: [[0.0; N]; N] };

    pub const IDENTITY: Self = {
        let mut cols = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            cols[i][i] = 1.0;
            i += 1;
        }
        Self { cols }
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from column arrays (`cols[c][r]`).
    #[inline]
    pub const fn from_cols(cols: [[f32; N]; N]) -> Self {
        Self { cols }
    }

    /// Builds a matrix from `f(column, row)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
        Self {
            cols: core::array::from_fn(|c| core::array::from_fn(|r| f(c, r))),
        }
    }

    /// Builds a matrix from a flat column-major slice of exactly `N * N` values.
    pub fn try_from_slice(values: &[f32]) -> Result<Self, MathError> {
        if values.len() != N * N {
            return Err(MathError::ShapeMismatch {
                left_columns: N,
                right_rows: values.len() / N.max(1),
            });
        }
        Ok(Self::from_fn(|c, r| values[c * N + r]))
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        N
    }

    #[inline]
    pub const fn columns(&self) -> usize {
        N
    }

    #[inline]
    pub const fn as_cols(&self) -> &[[f32; N]; N] {
        &self.cols
    }

    /// Flat column-major view, ready for a uniform upload.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.cols.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.cols.as_flattened_mut()
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.cols[col][row]
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        self.cols[col][row] = value;
    }

    #[inline]
    pub fn col(&self, c: usize) -> Vector<N> {
        Vector(self.cols[c])
    }

    #[inline]
    pub fn row(&self, r: usize) -> Vector<N> {
        Vector(core::array::from_fn(|c| self.cols[c][r]))
    }

    #[inline]
    pub fn set_col(&mut self, c: usize, v: Vector<N>) {
        self.cols[c] = v.0;
    }

    /// Resets `self` to the identity in place.
    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    #[inline]
    pub fn copy_into<'o>(&self, out: &'o mut Self) -> &'o mut Self {
        *out = *self;
        out
    }

    // ── matrix × matrix ───────────────────────────────────────────────────

    /// Standard product `self · rhs`, allocating the result.
    pub fn multiply_matrix(&self, rhs: &Self) -> Self {
        Self::from_fn(|c, r| (0..N).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum())
    }

    /// Writes `self · rhs` into `out`.
    #[inline]
    pub fn multiply_matrix_into<'o>(&self, rhs: &Self, out: &'o mut Self) -> &'o mut Self {
        *out = self.multiply_matrix(rhs);
        out
    }

    /// `self = self · rhs`. The product is formed in a temporary first.
    #[inline]
    pub fn multiply_matrix_assign(&mut self, rhs: &Self) {
        let product = self.multiply_matrix(rhs);
        *self = product;
    }

    /// `self = lhs · self`. The product is formed in a temporary first.
    #[inline]
    pub fn pre_multiply_assign(&mut self, lhs: &Self) {
        let product = lhs.multiply_matrix(self);
        *self = product;
    }

    // ── matrix × vector / scalar ──────────────────────────────────────────

    /// `self · v` with `v` as a column vector.
    pub fn multiply_vector(&self, v: Vector<N>) -> Vector<N> {
        Vector(core::array::from_fn(|r| {
            (0..N).map(|c| self.cols[c][r] * v.0[c]).sum()
        }))
    }

    #[inline]
    pub fn multiply_vector_into<'o>(&self, v: Vector<N>, out: &'o mut Vector<N>) -> &'o mut Vector<N> {
        *out = self.multiply_vector(v);
        out
    }

    #[inline]
    pub fn multiply_scalar(&self, f: f32) -> Self {
        Self::from_fn(|c, r| self.cols[c][r] * f)
    }

    #[inline]
    pub fn multiply_scalar_into<'o>(&self, f: f32, out: &'o mut Self) -> &'o mut Self {
        *out = self.multiply_scalar(f);
        out
    }

    // ── transpose / inverse ───────────────────────────────────────────────

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_fn(|c, r| self.cols[r][c])
    }

    #[inline]
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }

    pub fn determinant(&self) -> f32 {
        determinant_column_major(N, self.as_slice()) as f32
    }

    /// Inverse via Gauss-Jordan elimination.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is within
    /// [`SINGULAR_EPSILON`] of zero.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let inv = invert_column_major(N, self.as_slice())?;
        Ok(Self::from_fn(|c, r| inv[c * N + r] as f32))
    }

    /// Writes the inverse into `out`; `out` is untouched on failure.
    pub fn inverse_into<'o>(&self, out: &'o mut Self) -> Result<&'o mut Self, MathError> {
        *out = self.inverse()?;
        Ok(out)
    }

    /// Elementwise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}
