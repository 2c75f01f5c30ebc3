//! Complete factorization over Q.

use std::fmt;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use spectra_poly::algorithms::squarefree::squarefree_decomposition;
use spectra_poly::dense::DensePoly;
use spectra_rings::rationals::Q;
use spectra_rings::traits::Ring;

use crate::error::FactorError;
use crate::univariate::factor_squarefree;

/// Configuration for factorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactorConfig {
    /// Seed for the random splitting polynomials.
    pub seed: u64,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe_f00d,
        }
    }
}

/// A polynomial written as `unit * f₁^m₁ * ... * f_k^m_k`.
///
/// Every `fᵢ` is monic and irreducible over Q; factors are sorted by degree,
/// then by coefficient vector (constant term first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    /// Leading coefficient of the factored polynomial.
    pub unit: Q,
    /// Irreducible factors with their multiplicities.
    pub factors: Vec<(DensePoly<Q>, u32)>,
}

impl Factorization {
    /// Multiplies the factorization back out.
    pub fn expand(&self) -> DensePoly<Q> {
        self.factors
            .iter()
            .fold(DensePoly::constant(self.unit.clone()), |acc, (f, m)| {
                acc.mul(&f.pow(*m))
            })
    }

    /// Degree of the factored polynomial.
    pub fn degree(&self) -> usize {
        self.factors
            .iter()
            .map(|(f, m)| f.degree() * *m as usize)
            .sum()
    }

    /// Multiplicity of every factor, in factor order.
    pub fn multiplicities(&self) -> Vec<u32> {
        self.factors.iter().map(|(_, m)| *m).collect()
    }

    /// The irreducible factors without multiplicities.
    pub fn irreducibles(&self) -> Vec<DensePoly<Q>> {
        self.factors.iter().map(|(f, _)| f.clone()).collect()
    }

    /// Returns true if every factor is linear.
    pub fn splits(&self) -> bool {
        self.factors.iter().all(|(f, _)| f.degree() == 1)
    }

    /// Roots of the linear factors with their multiplicities.
    pub fn rational_roots(&self) -> impl Iterator<Item = (Q, u32)> + '_ {
        self.factors
            .iter()
            .filter(|(f, _)| f.degree() == 1)
            .map(|(f, m)| (-f.coeff(0), *m))
    }

    /// Formats the product in the named indeterminate.
    pub fn display_in<'a>(&'a self, var: &'a str) -> FactorizationDisplay<'a> {
        FactorizationDisplay { inner: self, var }
    }
}

/// Rendering of a [`Factorization`] such as `(x - 1)^2(x + 2)`.
pub struct FactorizationDisplay<'a> {
    inner: &'a Factorization,
    var: &'a str,
}

impl fmt::Display for FactorizationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = &self.inner.unit;
        if self.inner.factors.is_empty() {
            return write!(f, "{unit}");
        }

        if unit == &-Q::one() {
            write!(f, "-")?;
        } else if !unit.is_one() {
            let text = unit.to_string();
            if text.contains('/') {
                write!(f, "({text})")?;
            } else {
                write!(f, "{text}")?;
            }
        }

        for (factor, m) in &self.inner.factors {
            write!(f, "({})", factor.display_in(self.var))?;
            if *m > 1 {
                write!(f, "^{m}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in("x"))
    }
}

/// Factors a polynomial into monic irreducibles over Q.
pub fn factor_over_q(f: &DensePoly<Q>) -> Result<Factorization, FactorError> {
    factor_over_q_with(f, &FactorConfig::default())
}

/// Factors a polynomial into monic irreducibles over Q with the given
/// configuration.
///
/// Squarefree parts are made primitive over Z and split with the modular
/// method; the result does not depend on the seed, only the work done does.
pub fn factor_over_q_with(
    f: &DensePoly<Q>,
    config: &FactorConfig,
) -> Result<Factorization, FactorError> {
    if f.is_zero() {
        return Err(FactorError::ZeroPolynomial);
    }

    let decomposition = squarefree_decomposition(f);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut factors = Vec::new();

    for part in &decomposition.factors {
        let (_, primitive) = part.factor.to_primitive_integer();
        for g in factor_squarefree(&primitive, &mut rng)? {
            factors.push((g.to_rational().monic(), part.multiplicity));
        }
    }

    factors.sort_by(|(a, _), (b, _)| {
        a.degree()
            .cmp(&b.degree())
            .then_with(|| a.coeffs().cmp(b.coeffs()))
    });

    debug!(
        "factored degree {} into {} irreducibles",
        f.degree(),
        factors.len()
    );

    Ok(Factorization {
        unit: decomposition.unit,
        factors,
    })
}

/// Factors many polynomials in parallel.
pub fn factor_batch(
    polys: &[DensePoly<Q>],
    config: &FactorConfig,
) -> Vec<Result<Factorization, FactorError>> {
    polys
        .par_iter()
        .map(|f| factor_over_q_with(f, config))
        .collect()
}
