//! Textual matrix input.
//!
//! Accepted forms:
//!
//! ```text
//! [1 2 3; 0 1 5; 0 0 -2]      rows split by `;`
//! [[1, 2], [3/4, -0.5]]       nested brackets
//! 1 2
//! 3 4                         rows split by newlines
//! ```
//!
//! Entries are separated by commas or whitespace and parsed as exact
//! rationals (`7`, `-3/4`, `1.25`).

use std::str::FromStr;

use spectra_rings::rationals::Q;

use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;

/// Parses a rational matrix.
pub fn parse_matrix(input: &str) -> Result<DenseMatrix<Q>, MatrixError> {
    let rows = split_rows(input)
        .into_iter()
        .enumerate()
        .map(|(row, text)| parse_row(row, text))
        .collect::<Result<Vec<_>, _>>()?;

    DenseMatrix::try_from_rows(rows)
}

impl FromStr for DenseMatrix<Q> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}

fn split_rows(input: &str) -> Vec<&str> {
    let body = input.trim();
    let body = match body.strip_prefix('[').and_then(|b| b.strip_suffix(']')) {
        Some(inner) => inner.trim(),
        None => body,
    };

    if body.contains('[') {
        body.split(']')
            .map(|r| r.trim().trim_start_matches(',').trim().trim_start_matches('['))
            .filter(|r| !r.trim().is_empty())
            .collect()
    } else {
        body.split([';', '\n'])
            .filter(|r| !r.trim().is_empty())
            .collect()
    }
}

fn parse_row(row: usize, text: &str) -> Result<Vec<Q>, MatrixError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(col, token)| {
            token
                .parse::<Q>()
                .map_err(|source| MatrixError::InvalidEntry { row, col, source })
        })
        .collect()
}
