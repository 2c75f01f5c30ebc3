//! # Spectra
//!
//! Exact spectral analysis of rational matrices.
//!
//! For a square matrix over Q, Spectra computes the characteristic
//! polynomial (expanded and factored), the minimal polynomial, the
//! eigenvalue / multiplicity / eigenspace triplets and, when the spectrum is
//! rational, the Jordan form `P^-1 A P = J`.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Big integers and rationals throughout
//! - **Factorization over Q**: Cantor-Zassenhaus with Zassenhaus recombination
//! - **Minimal Polynomial Search**: Factor-power substitution in
//!   total-degree order
//! - **Jordan Structure**: Block sizes from rank sequences, chains for `P`
//!
//! ## Quick Start
//!
//! ```rust
//! use spectra::prelude::*;
//!
//! let a = parse_matrix("[1 2 3; 0 1 5; 0 0 -2]").unwrap();
//! let analysis = analyze(&a, &SearchConfig::default()).unwrap();
//! assert_eq!(analysis.minimal.to_string(), "(x - 1)^2(x + 2)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;

pub use spectra_factor as factor;
pub use spectra_integers as integers;
pub use spectra_linalg as linalg;
pub use spectra_minpoly as minpoly;
pub use spectra_poly as poly;
pub use spectra_rings as rings;

pub use report::{analyze, Analysis, AnalysisDisplay, AnalysisError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::report::{analyze, Analysis};
    pub use spectra_factor::{factor_over_q, Factorization};
    pub use spectra_integers::{Integer, Rational};
    pub use spectra_linalg::{
        characteristic_polynomial, eigen_triplets, jordan_form, parse_matrix, DenseMatrix,
    };
    pub use spectra_minpoly::{
        minimal_polynomial, minimal_polynomial_with, EnumerationOrder, MinimalPolynomial,
        SearchConfig,
    };
    pub use spectra_poly::DensePoly;
    pub use spectra_rings::{Field, Ring, Q, Z};
}
