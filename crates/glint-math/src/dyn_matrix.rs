//! Heap-backed rows × columns matrix.
//!
//! The fixed-size types make shape errors impossible; this one carries its
//! shape at runtime and reports [`MathError::ShapeMismatch`] instead.

use crate::error::MathError;
use crate::matrix::{Matrix, determinant_column_major, invert_column_major};

/// Column-major `rows × columns` matrix of `f32`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix {
    columns: usize,
    rows: usize,
    data: Vec<f32>,
}

impl DynMatrix {
    /// Zero-filled `columns × rows` matrix.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            data: vec![0.0; columns * rows],
        }
    }

    /// Wraps column-major `data`; its length must be `columns * rows`.
    pub fn from_column_major(columns: usize, rows: usize, data: Vec<f32>) -> Result<Self, MathError> {
        if data.len() != columns * rows {
            return Err(MathError::ShapeMismatch {
                left_columns: columns,
                right_rows: data.len() / columns.max(1),
            });
        }
        Ok(Self { columns, rows, data })
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        m.set_identity();
        m
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.data[col * self.rows + row]
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        self.data[col * self.rows + row] = value;
    }

    /// Ones on the main diagonal, zeros elsewhere. Non-square shapes get a
    /// partial diagonal.
    pub fn set_identity(&mut self) {
        let rows = self.rows;
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = if i / rows == i % rows { 1.0 } else { 0.0 };
        }
    }

    /// `self · rhs`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MathError> {
        let mut out = Self::new(rhs.columns, self.rows);
        self.multiply_into(rhs, &mut out)?;
        Ok(out)
    }

    /// Writes `self · rhs` into `out`, which must already be
    /// `rhs.columns × self.rows`.
    pub fn multiply_into<'o>(&self, rhs: &Self, out: &'o mut Self) -> Result<&'o mut Self, MathError> {
        if self.columns != rhs.rows {
            return Err(MathError::ShapeMismatch {
                left_columns: self.columns,
                right_rows: rhs.rows,
            });
        }
        if out.columns != rhs.columns || out.rows != self.rows {
            return Err(MathError::ShapeMismatch {
                left_columns: out.columns,
                right_rows: out.rows,
            });
        }
        for c in 0..rhs.columns {
            for r in 0..self.rows {
                let sum = (0..self.columns).map(|k| self.get(k, r) * rhs.get(c, k)).sum();
                out.set(c, r, sum);
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.rows, self.columns);
        for c in 0..self.columns {
            for r in 0..self.rows {
                out.set(r, c, self.get(c, r));
            }
        }
        out
    }

    fn require_square(&self) -> Result<(), MathError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MathError::ShapeMismatch {
                left_columns: self.columns,
                right_rows: self.rows,
            })
        }
    }

    pub fn determinant(&self) -> Result<f32, MathError> {
        self.require_square()?;
        Ok(determinant_column_major(self.rows, &self.data) as f32)
    }

    pub fn inverse(&self) -> Result<Self, MathError> {
        self.require_square()?;
        let inv = invert_column_major(self.rows, &self.data)?;
        Ok(Self {
            columns: self.columns,
            rows: self.rows,
            data: inv.into_iter().map(|v| v as f32).collect(),
        })
    }
}

impl<const N: usize> From<Matrix<N>> for DynMatrix {
    fn from(m: Matrix<N>) -> Self {
        Self {
            columns: N,
            rows: N,
            data: m.as_slice().to_vec(),
        }
    }
}

impl<const N: usize> TryFrom<&DynMatrix> for Matrix<N> {
    type Error = MathError;

    fn try_from(m: &DynMatrix) -> Result<Self, MathError> {
        if m.columns != N || m.rows != N {
            return Err(MathError::ShapeMismatch {
                left_columns: m.columns,
                right_rows: m.rows,
            });
        }
        Matrix::try_from_slice(&m.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Mat3, Mat4};
    use crate::vector::Vec2;

    #[test]
    fn rectangular_product() {
        // 2 rows × 3 columns times 3 rows × 1 column.
        let a = DynMatrix::from_column_major(3, 2, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        let v = DynMatrix::from_column_major(1, 3, vec![1.0, 1.0, 1.0]).unwrap();
        let p = a.multiply(&v).unwrap();
        assert_eq!((p.columns(), p.rows()), (1, 2));
        assert_eq!(p.as_slice(), &[6.0, 15.0]);
    }

    #[test]
    fn inner_dimension_mismatch() {
        let a = DynMatrix::new(3, 2);
        let b = DynMatrix::new(2, 2);
        assert_eq!(
            a.multiply(&b),
            Err(MathError::ShapeMismatch { left_columns: 3, right_rows: 2 })
        );
    }

    #[test]
    fn multiply_into_checks_output_shape() {
        let a = DynMatrix::identity(2);
        let mut wrong = DynMatrix::new(3, 3);
        assert!(a.multiply_into(&a, &mut wrong).is_err());
        let mut right = DynMatrix::new(2, 2);
        assert_eq!(a.multiply_into(&a, &mut right).unwrap(), &DynMatrix::identity(2));
    }

    #[test]
    fn from_column_major_checks_length() {
        assert!(DynMatrix::from_column_major(2, 2, vec![0.0; 3]).is_err());
    }

    #[test]
    fn transpose_swaps_shape() {
        let a = DynMatrix::from_column_major(3, 2, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!((t.columns(), t.rows()), (2, 3));
        assert_eq!(t.get(1, 2), a.get(2, 1));
    }

    #[test]
    fn inverse_requires_square() {
        assert!(matches!(
            DynMatrix::new(3, 2).inverse(),
            Err(MathError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            DynMatrix::new(2, 2).inverse(),
            Err(MathError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn fixed_size_round_trip() {
        let m = Mat3::IDENTITY.translate_2d(Vec2::new(2.0, 3.0));
        let d = DynMatrix::from(m);
        assert_eq!(d.determinant().unwrap(), 1.0);
        let back = Mat3::try_from(&d).unwrap();
        assert_eq!(back, m);
        assert!(Mat4::try_from(&d).is_err());

        let inv = Mat3::try_from(&d.inverse().unwrap()).unwrap();
        assert!(inv.approx_eq(&m.inverse().unwrap(), 1e-6));
    }
}
