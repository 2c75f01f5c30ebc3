//! The full spectral report for one matrix.

use std::fmt;

use log::debug;
use spectra_linalg::{
    eigen_triplets_from, jordan_form_from, DenseMatrix, EigenDecomposition, JordanDecomposition,
    MatrixError,
};
use spectra_minpoly::{MinPolyError, MinPolySearch, MinimalPolynomial, SearchConfig};
use spectra_poly::DensePoly;
use spectra_rings::Q;
use thiserror::Error;

/// Errors that can occur while analysing a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The minimal polynomial search failed.
    #[error(transparent)]
    MinPoly(#[from] MinPolyError),

    /// A linear algebra step failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Everything computed for one matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// The input.
    pub matrix: DenseMatrix<Q>,
    /// `det(xI - A)` expanded.
    pub characteristic: DensePoly<Q>,
    /// The minimal polynomial with the factored characteristic polynomial.
    pub minimal: MinimalPolynomial,
    /// Rational eigen-triplets and the remaining irreducible factors.
    pub eigen: EigenDecomposition,
    /// `P^-1 A P = J`, present when the characteristic polynomial splits
    /// over Q.
    pub jordan: Option<JordanDecomposition>,
}

impl Analysis {
    /// Renders the report with polynomials in the named indeterminate.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> AnalysisDisplay<'a> {
        AnalysisDisplay { inner: self, var }
    }
}

/// Computes the characteristic and minimal polynomials, eigen-triplets and
/// the Jordan form of a square rational matrix.
///
/// The characteristic polynomial is factored once and shared by every step.
///
/// # Errors
///
/// Fails if the matrix is not square, the characteristic polynomial cannot
/// be factored, or the search budget in `config` runs out.
pub fn analyze(a: &DenseMatrix<Q>, config: &SearchConfig) -> Result<Analysis, AnalysisError> {
    let minimal = MinPolySearch::new(config.clone()).run(a)?;
    let factored = &minimal.characteristic;

    let characteristic = factored.expand();
    let eigen = eigen_triplets_from(a, factored);
    let jordan = if factored.splits() {
        Some(jordan_form_from(a, factored)?)
    } else {
        debug!("characteristic polynomial does not split, skipping Jordan form");
        None
    };

    Ok(Analysis {
        matrix: a.clone(),
        characteristic,
        minimal,
        eigen,
        jordan,
    })
}

/// Rendering of an [`Analysis`] in a chosen indeterminate.
pub struct AnalysisDisplay<'a> {
    inner: &'a Analysis,
    var: &'a str,
}

impl fmt::Display for AnalysisDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Analysis {
            matrix,
            characteristic,
            minimal,
            eigen,
            jordan,
        } = self.inner;
        let var = self.var;

        writeln!(f, "Input Matrix:")?;
        writeln!(f, "{matrix}")?;
        writeln!(f)?;

        writeln!(
            f,
            "Characteristic Polynomial Expanded:   {}",
            characteristic.display_in(var)
        )?;
        writeln!(
            f,
            "Characteristic Polynomial Factorized: {}",
            minimal.characteristic.display_in(var)
        )?;
        writeln!(
            f,
            "Minimal Polynomial:                   {} = {}",
            minimal.display_in(var),
            minimal.polynomial.display_in(var)
        )?;
        writeln!(f)?;

        writeln!(f, "(Eigen Value, Algebraic Multiplicity, Eigenspace Basis) triplets:")?;
        writeln!(f)?;
        for t in &eigen.triplets {
            let basis: Vec<String> = t.basis.iter().map(|v| vector(v)).collect();
            writeln!(
                f,
                "({}, {}, [{}])",
                t.eigenvalue,
                t.algebraic_multiplicity,
                basis.join(", ")
            )?;
        }
        for (factor, m) in &eigen.irrational {
            writeln!(
                f,
                "roots of {} with multiplicity {m} are not rational",
                factor.display_in(var)
            )?;
        }

        if let Some(jd) = jordan {
            writeln!(f)?;
            writeln!(f, "P^-1 A P = J")?;
            writeln!(f)?;
            writeln!(f, "P =\n{}", jd.p)?;
            writeln!(f)?;
            writeln!(f, "J =\n{}", jd.j)?;
        }

        Ok(())
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in("x"))
    }
}

fn vector(v: &[Q]) -> String {
    let entries: Vec<String> = v.iter().map(ToString::to_string).collect();
    format!("[{}]", entries.join(", "))
}
