//! # spectra-linalg
//!
//! Exact dense linear algebra over the rationals.
//!
//! This crate provides:
//! - Dense matrices with elimination, rank, null space, determinant, inverse
//! - The characteristic polynomial (Faddeev-LeVerrier)
//! - Eigenvalue / multiplicity / eigenspace triplets
//! - Jordan block structure and the Jordan form `P^-1 A P = J`
//! - A textual matrix parser (`[1 2 3; 0 1 5; 0 0 -2]`)
//!
//! Eigenvalues are found by factoring the characteristic polynomial over Q;
//! irreducible factors of higher degree are reported as polynomials.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod charpoly;
pub mod dense_matrix;
pub mod eigen;
pub mod error;
pub mod jordan;
pub mod parse;

pub use charpoly::characteristic_polynomial;
pub use dense_matrix::DenseMatrix;
pub use eigen::{eigen_triplets, eigen_triplets_from, EigenDecomposition, EigenTriplet};
pub use error::MatrixError;
pub use jordan::{
    jordan_form, jordan_form_from, jordan_matrix, jordan_structure, jordan_structure_from,
    JordanBlock, JordanDecomposition,
};
pub use parse::parse_matrix;

#[cfg(test)]
mod proptests;
