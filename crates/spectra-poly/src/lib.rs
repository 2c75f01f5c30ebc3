//! # spectra-poly
//!
//! Univariate polynomial arithmetic for exact matrix algebra.
//!
//! This crate provides:
//! - Dense univariate polynomials over any [`Ring`](spectra_rings::Ring)
//! - Euclidean division, GCD, content and primitive part
//! - Squarefree decomposition (Yun)
//!
//! Every polynomial the matrix crates build (characteristic polynomial,
//! irreducible factors, minimal polynomial candidates) is a `DensePoly<Q>`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{content, poly_gcd, primitive_part};
pub use algorithms::squarefree::{
    is_squarefree, squarefree_decomposition, SquarefreeDecomposition, SquarefreeFactor,
};
pub use dense::{DensePoly, PolyDisplay};
