use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::vector::Vector;

use super::Matrix;

impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply_matrix(&rhs)
    }
}

impl<const N: usize> Mul<&Matrix<N>> for &Matrix<N> {
    type Output = Matrix<N>;

    #[inline]
    fn mul(self, rhs: &Matrix<N>) -> Matrix<N> {
        self.multiply_matrix(rhs)
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        self.multiply_vector(rhs)
    }
}

impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_matrix_assign(&rhs);
    }
}

impl<const N: usize> MulAssign<f32> for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.multiply_scalar(rhs);
    }
}

/// Flat column-major access: index `i` is column `i / N`, row `i % N`.
impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.cols[i / N][i % N]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.cols[i / N][i % N]
    }
}

/// `m[(col, row)]`.
impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;

    #[inline]
    fn index(&self, (c, r): (usize, usize)) -> &f32 {
        &self.cols[c][r]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (c, r): (usize, usize)) -> &mut f32 {
        &mut self.cols[c][r]
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn from(cols: [[f32; N]; N]) -> Self {
        Self::from_cols(cols)
    }
}

impl<const N: usize> From<Matrix<N>> for [[f32; N]; N] {
    #[inline]
    fn from(m: Matrix<N>) -> Self {
        m.cols
    }
}
