//! # spectra-minpoly
//!
//! Minimal polynomials of rational matrices by exact factor-power
//! substitution.
//!
//! This crate provides:
//! - **Substitution**: `∏ fᵢ(A)^pᵢ` evaluated exactly over Q
//! - **Candidate enumeration**: exponent tuples in total-degree order, or
//!   the round-robin order kept for compatibility
//! - **Search**: the first candidate that annihilates A, with an optional
//!   timeout, candidate cap and cancellation token
//!
//! # Example
//!
//! ```
//! use spectra_linalg::parse_matrix;
//! use spectra_minpoly::{minimal_polynomial_with, SearchConfig};
//!
//! let a = parse_matrix("[1 1; 0 1]").unwrap();
//! let m = minimal_polynomial_with(&a, &SearchConfig::default()).unwrap();
//! assert_eq!(m.to_string(), "(x - 1)^2");
//! ```
//!
//! # Parallelism
//!
//! [`minimal_polynomials`] runs independent searches with rayon; a single
//! search is sequential.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod candidates;
pub mod config;
pub mod error;
pub mod search;
pub mod substitute;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

// Re-exports
pub use candidates::{enumerate_candidates, enumerate_candidates_weighted, Candidates, ExponentTuple};
pub use config::{CancelToken, EnumerationOrder, SearchConfig};
pub use error::{Mismatch, MinPolyError};
pub use search::{
    minimal_polynomial, minimal_polynomial_with, minimal_polynomials, MinPolySearch,
    MinimalPolynomial,
};
pub use substitute::{evaluate, substitute, PreparedSubstitution};
