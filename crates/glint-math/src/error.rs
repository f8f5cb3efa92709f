use thiserror::Error;

/// Errors reported by matrix operations.
///
/// Errors are local to the call that detects them; nothing is stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Left operand's column count differs from the right operand's row count
    /// (or an output / conversion target has the wrong shape).
    #[error("shape mismatch: left has {left_columns} columns, right has {right_rows} rows")]
    ShapeMismatch {
        left_columns: usize,
        right_rows: usize,
    },

    /// Inverse requested for a matrix whose determinant is within
    /// [`SINGULAR_EPSILON`](crate::SINGULAR_EPSILON) of zero.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f64 },
}
