//! Minimal polynomial search.
//!
//! Every candidate divides the characteristic polynomial, so the search
//! only has to decide which exponents suffice:
//!
//! ```text
//! χ_A = f₁^m₁ ··· f_k^m_k
//! μ_A = f₁^e₁ ··· f_k^e_k,   1 ≤ eᵢ ≤ mᵢ
//! ```
//!
//! Candidates are substituted into A in the configured order and the first
//! one that yields the zero matrix wins. Cayley-Hamilton guarantees that the
//! full multiplicity tuple annihilates A.

use std::fmt;
use std::time::Instant;

use log::{debug, error, info, warn};
use rayon::prelude::*;
use spectra_factor::{factor_over_q_with, Factorization, FactorizationDisplay};
use spectra_linalg::{characteristic_polynomial, DenseMatrix};
use spectra_poly::dense::DensePoly;
use spectra_rings::rationals::Q;
use spectra_rings::traits::Ring;

use crate::candidates::{enumerate_candidates_weighted, ExponentTuple};
use crate::config::SearchConfig;
use crate::error::MinPolyError;
use crate::substitute::{check_square, PreparedSubstitution};

/// Result of a successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimalPolynomial {
    /// Irreducible factors with the winning exponents.
    pub factored: Factorization,
    /// The winning exponent tuple, in factor order.
    pub exponents: ExponentTuple,
    /// `∏ fᵢ^eᵢ` expanded, monic.
    pub polynomial: DensePoly<Q>,
    /// The factored characteristic polynomial.
    pub characteristic: Factorization,
    /// Number of candidates substituted, the winner included.
    pub tested: usize,
}

impl MinimalPolynomial {
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    /// Formats the factored form in the named indeterminate.
    pub fn display_in<'a>(&'a self, var: &'a str) -> FactorizationDisplay<'a> {
        self.factored.display_in(var)
    }
}

impl fmt::Display for MinimalPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factored)
    }
}

/// A configured minimal polynomial search.
#[derive(Clone, Debug, Default)]
pub struct MinPolySearch {
    config: SearchConfig,
}

impl MinPolySearch {
    /// Creates a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search on a square rational matrix.
    pub fn run(&self, a: &DenseMatrix<Q>) -> Result<MinimalPolynomial, MinPolyError> {
        check_square(a)?;
        let start = Instant::now();

        let charpoly = characteristic_polynomial(a)?;
        let characteristic = factor_over_q_with(&charpoly, &self.config.factor)?;
        self.run_factored(a, characteristic, start)
    }

    /// Runs the search with an already factored characteristic polynomial.
    pub fn run_with(
        &self,
        a: &DenseMatrix<Q>,
        characteristic: Factorization,
    ) -> Result<MinimalPolynomial, MinPolyError> {
        check_square(a)?;
        self.run_factored(a, characteristic, Instant::now())
    }

    fn run_factored(
        &self,
        a: &DenseMatrix<Q>,
        characteristic: Factorization,
        start: Instant,
    ) -> Result<MinimalPolynomial, MinPolyError> {
        let factors = characteristic.irreducibles();
        let multiplicities = characteristic.multiplicities();
        let degrees: Vec<usize> = factors.iter().map(DensePoly::degree).collect();

        debug!(
            "characteristic polynomial {characteristic}, {} candidates",
            multiplicities
                .iter()
                .try_fold(1usize, |acc, &m| acc.checked_mul(m as usize))
                .unwrap_or(usize::MAX)
        );

        let prepared = PreparedSubstitution::new(a, &factors, &multiplicities)?;
        let candidates = enumerate_candidates_weighted(&multiplicities, &degrees, self.config.order)?;

        let mut tested = 0;
        for exponents in candidates {
            if self.budget_exhausted(tested, start) {
                let elapsed = start.elapsed();
                warn!("search stopped after {tested} candidates ({elapsed:?})");
                return Err(MinPolyError::SearchTimedOut { tested, elapsed });
            }

            tested += 1;
            let annihilates = prepared.product(&exponents).is_zero();
            debug!("candidate {exponents:?}: annihilates = {annihilates}");

            if annihilates {
                let factored = Factorization {
                    unit: Q::one(),
                    factors: factors.iter().cloned().zip(exponents.iter().copied()).collect(),
                };
                let polynomial = factored.expand();
                info!("minimal polynomial {factored} after {tested} candidates");

                return Ok(MinimalPolynomial {
                    factored,
                    exponents,
                    polynomial,
                    characteristic,
                    tested,
                });
            }
        }

        error!("no candidate annihilated the matrix ({tested} tested)");
        Err(MinPolyError::MinimalPolynomialNotFound { tested })
    }

    fn budget_exhausted(&self, tested: usize, start: Instant) -> bool {
        self.config.cancel.as_ref().is_some_and(|t| t.is_cancelled())
            || self.config.timeout.is_some_and(|t| start.elapsed() >= t)
            || self.config.max_candidates.is_some_and(|max| tested >= max)
    }
}

/// Computes the minimal polynomial of a square rational matrix.
///
/// # Example
///
/// ```
/// use spectra_linalg::parse_matrix;
/// use spectra_minpoly::minimal_polynomial;
///
/// let a = parse_matrix("[1 2 3; 0 1 5; 0 0 -2]").unwrap();
/// assert_eq!(minimal_polynomial(&a).unwrap().to_string(), "x^3 - 3x + 2");
/// ```
pub fn minimal_polynomial(a: &DenseMatrix<Q>) -> Result<DensePoly<Q>, MinPolyError> {
    minimal_polynomial_with(a, &SearchConfig::default()).map(|m| m.polynomial)
}

/// Computes the minimal polynomial with the given configuration.
pub fn minimal_polynomial_with(
    a: &DenseMatrix<Q>,
    config: &SearchConfig,
) -> Result<MinimalPolynomial, MinPolyError> {
    MinPolySearch::new(config.clone()).run(a)
}

/// Searches several matrices in parallel, one sequential search each.
pub fn minimal_polynomials(
    matrices: &[DenseMatrix<Q>],
    config: &SearchConfig,
) -> Vec<Result<MinimalPolynomial, MinPolyError>> {
    let search = MinPolySearch::new(config.clone());
    matrices.par_iter().map(|a| search.run(a)).collect()
}
