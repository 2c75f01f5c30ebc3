//! Minimal polynomial errors.

use std::time::Duration;

use spectra_factor::FactorError;
use spectra_linalg::MatrixError;
use thiserror::Error;

/// Which shape precondition failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix has no entries")]
    Empty,

    #[error("{factors} factors but {powers} powers")]
    LengthMismatch { factors: usize, powers: usize },
}

/// Errors that can occur while searching for a minimal polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MinPolyError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] Mismatch),

    /// Every candidate was tested and none annihilated the matrix. The full
    /// characteristic factorization always does, so this signals a defect.
    #[error("no candidate annihilated the matrix after {tested} candidates")]
    MinimalPolynomialNotFound { tested: usize },

    #[error("search budget exhausted after {tested} candidates ({elapsed:?})")]
    SearchTimedOut { tested: usize, elapsed: Duration },

    #[error(transparent)]
    Factor(#[from] FactorError),

    #[error(transparent)]
    Matrix(MatrixError),
}

impl From<MatrixError> for MinPolyError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::NotSquare { rows, cols } => Mismatch::NotSquare { rows, cols }.into(),
            MatrixError::Empty => Mismatch::Empty.into(),
            MatrixError::Factor(e) => Self::Factor(e),
            other => Self::Matrix(other),
        }
    }
}
