//! Squarefree decomposition.
//!
//! Writes a polynomial over a field of characteristic zero as
//!
//! f = unit * f₁ * f₂² * f₃³ * ...
//!
//! with every fᵢ monic, squarefree and pairwise coprime (Yun's algorithm).
//! The multiplicities found here are exactly the algebraic multiplicities
//! that bound the minimal polynomial search.

use spectra_rings::traits::Field;

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use crate::dense::DensePoly;

/// A squarefree factor together with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor<F: Field> {
    /// Monic squarefree factor.
    pub factor: DensePoly<F>,
    /// Exponent of the factor in the input.
    pub multiplicity: u32,
}

/// Result of a squarefree decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeDecomposition<F: Field> {
    /// Leading coefficient of the input.
    pub unit: F,
    /// Factors ordered by increasing multiplicity.
    pub factors: Vec<SquarefreeFactor<F>>,
}

impl<F: Field> SquarefreeDecomposition<F> {
    /// Multiplies the decomposition back out.
    pub fn to_polynomial(&self) -> DensePoly<F> {
        self.factors
            .iter()
            .fold(DensePoly::constant(self.unit.clone()), |acc, sf| {
                acc.mul(&sf.factor.pow(sf.multiplicity))
            })
    }

    /// Returns true if every multiplicity is 1.
    pub fn is_squarefree(&self) -> bool {
        self.factors.iter().all(|f| f.multiplicity == 1)
    }
}

/// Yun's squarefree decomposition.
///
/// Constants (including zero) decompose into a unit and no factors.
pub fn squarefree_decomposition<F: Field>(f: &DensePoly<F>) -> SquarefreeDecomposition<F> {
    let unit = f.leading_coeff().clone();
    if f.degree() == 0 {
        return SquarefreeDecomposition {
            unit,
            factors: Vec::new(),
        };
    }

    let f = make_monic(f);
    let f_prime = f.derivative();
    let g = poly_gcd(&f, &f_prime);

    let mut a = poly_div_rem(&f, &g).0;
    let mut b = poly_div_rem(&f_prime, &g).0;
    let mut factors = Vec::new();
    let mut multiplicity = 1u32;

    while a.degree() > 0 {
        let c = b.sub(&a.derivative());
        let d = poly_gcd(&a, &c);

        if d.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }

        if c.is_zero() {
            break;
        }

        a = poly_div_rem(&a, &d).0;
        b = poly_div_rem(&c, &d).0;
        multiplicity += 1;
    }

    SquarefreeDecomposition { unit, factors }
}

/// Returns true if gcd(f, f') is constant.
pub fn is_squarefree<F: Field>(f: &DensePoly<F>) -> bool {
    f.degree() == 0 || poly_gcd(f, &f.derivative()).degree() == 0
}
