//! Gauss-Jordan elimination over flat column-major storage.
//!
//! Shared by the fixed-size matrices and `DynMatrix`. Accumulates in `f64`.

use crate::error::MathError;

use super::SINGULAR_EPSILON;

#[inline]
fn swap_rows(m: &mut [f64], n: usize, a: usize, b: usize) {
    for c in 0..n {
        m.swap(c * n + a, c * n + b);
    }
}

/// Row with the largest magnitude in `col`, searching rows `col..n`.
#[inline]
fn pivot_row(m: &[f64], n: usize, col: usize) -> usize {
    let mut pivot = col;
    for r in col + 1..n {
        if m[col * n + r].abs() > m[col * n + pivot].abs() {
            pivot = r;
        }
    }
    pivot
}

/// Determinant of an `n × n` column-major matrix.
pub(crate) fn determinant_column_major(n: usize, src: &[f32]) -> f64 {
    let mut a: Vec<f64> = src.iter().map(|&v| f64::from(v)).collect();
    let mut det = 1.0f64;

    for col in 0..n {
        let pivot = pivot_row(&a, n, col);
        let p = a[col * n + pivot];
        if p == 0.0 {
            return 0.0;
        }
        if pivot != col {
            swap_rows(&mut a, n, pivot, col);
            det = -det;
        }
        det *= p;

        for r in col + 1..n {
            let factor = a[col * n + r] / p;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                a[c * n + r] -= factor * a[c * n + col];
            }
        }
    }
    det
}

/// Inverse of an `n × n` column-major matrix, returned column-major.
pub(crate) fn invert_column_major(n: usize, src: &[f32]) -> Result<Vec<f64>, MathError> {
    let mut a: Vec<f64> = src.iter().map(|&v| f64::from(v)).collect();
    let mut inv = vec![0.0f64; n * n];
    for i in 0..n {
        inv[i * n + i] = 1.0;
    }
    let mut det = 1.0f64;

    for col in 0..n {
        let pivot = pivot_row(&a, n, col);
        let p = a[col * n + pivot];
        if p == 0.0 {
            return Err(MathError::SingularMatrix { determinant: 0.0 });
        }
        if pivot != col {
            swap_rows(&mut a, n, pivot, col);
            swap_rows(&mut inv, n, pivot, col);
            det = -det;
        }
        det *= p;

        for c in 0..n {
            a[c * n + col] /= p;
            inv[c * n + col] /= p;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = a[col * n + r];
            if factor == 0.0 {
                continue;
            }
            for c in 0..n {
                a[c * n + r] -= factor * a[c * n + col];
                inv[c * n + r] -= factor * inv[c * n + col];
            }
        }
    }

    if det.abs() < f64::from(SINGULAR_EPSILON) {
        return Err(MathError::SingularMatrix { determinant: det });
    }
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_determinant_is_singular() {
        // diag(1e-3, 1e-3, 1e-3): det = 1e-9, below the threshold.
        let m = [1e-3, 0.0, 0.0, 0.0, 1e-3, 0.0, 0.0, 0.0, 1e-3];
        assert!(matches!(
            invert_column_major(3, &m),
            Err(MathError::SingularMatrix { determinant }) if determinant.abs() < 1e-8
        ));
    }

    #[test]
    fn one_by_one() {
        assert_eq!(determinant_column_major(1, &[4.0]), 4.0);
        assert_eq!(invert_column_major(1, &[4.0]).unwrap(), vec![0.25]);
    }
}
