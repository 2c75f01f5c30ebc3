//! Matrix errors.

use spectra_factor::FactorError;
use spectra_integers::ParseRationalError;
use thiserror::Error;

/// Errors that can occur while building or analysing a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix has no entries")]
    Empty,

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid entry at ({row}, {col}): {source}")]
    InvalidEntry {
        row: usize,
        col: usize,
        source: ParseRationalError,
    },

    #[error("characteristic polynomial has the irreducible factor {factor}, which has no rational roots")]
    NonRationalSpectrum { factor: String },

    #[error(transparent)]
    Factor(#[from] FactorError),
}
