//! Eigenvalues, algebraic multiplicities and eigenspaces over Q.

use log::debug;
use spectra_factor::{factor_over_q, Factorization};
use spectra_poly::dense::DensePoly;
use spectra_rings::rationals::Q;

use crate::charpoly::characteristic_polynomial;
use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;

/// A rational eigenvalue with its multiplicity and eigenspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EigenTriplet {
    /// The eigenvalue.
    pub eigenvalue: Q,
    /// Multiplicity as a root of the characteristic polynomial.
    pub algebraic_multiplicity: u32,
    /// Basis of `ker(A - λI)`.
    pub basis: Vec<Vec<Q>>,
}

impl EigenTriplet {
    /// Dimension of the eigenspace.
    #[must_use]
    pub fn geometric_multiplicity(&self) -> usize {
        self.basis.len()
    }

    /// Returns true if the eigenspace is as large as the multiplicity allows.
    #[must_use]
    pub fn is_semisimple(&self) -> bool {
        self.basis.len() == self.algebraic_multiplicity as usize
    }
}

/// Spectral data of a rational matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EigenDecomposition {
    /// Rational eigenvalues in ascending order.
    pub triplets: Vec<EigenTriplet>,
    /// Irreducible factors of degree > 1 with their multiplicities.
    pub irrational: Vec<(DensePoly<Q>, u32)>,
}

impl EigenDecomposition {
    /// Returns true if every eigenvalue is rational.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.irrational.is_empty()
    }
}

/// Computes the eigen-triplets of a square matrix.
pub fn eigen_triplets(a: &DenseMatrix<Q>) -> Result<EigenDecomposition, MatrixError> {
    let charpoly = characteristic_polynomial(a)?;
    let factorization = factor_over_q(&charpoly)?;
    Ok(eigen_triplets_from(a, &factorization))
}

/// Computes the eigen-triplets from an already factored characteristic
/// polynomial.
pub fn eigen_triplets_from(a: &DenseMatrix<Q>, charpoly: &Factorization) -> EigenDecomposition {
    let mut triplets: Vec<EigenTriplet> = charpoly
        .rational_roots()
        .map(|(eigenvalue, multiplicity)| {
            let basis = a.shift(&eigenvalue).null_space();
            debug!(
                "eigenvalue {eigenvalue}: algebraic {multiplicity}, geometric {}",
                basis.len()
            );
            EigenTriplet {
                eigenvalue,
                algebraic_multiplicity: multiplicity,
                basis,
            }
        })
        .collect();
    triplets.sort_by(|x, y| x.eigenvalue.cmp(&y.eigenvalue));

    let irrational = charpoly
        .factors
        .iter()
        .filter(|(f, _)| f.degree() > 1)
        .cloned()
        .collect();

    EigenDecomposition {
        triplets,
        irrational,
    }
}
