//! Factor-power substitution: evaluating `∏ fᵢ(A)^pᵢ` exactly.

use log::trace;
use spectra_linalg::DenseMatrix;
use spectra_poly::dense::DensePoly;
use spectra_rings::rationals::Q;

use crate::error::{Mismatch, MinPolyError};

/// Checks that `a` is square and non-empty, returning its dimension.
pub fn check_square(a: &DenseMatrix<Q>) -> Result<usize, Mismatch> {
    if !a.is_square() {
        return Err(Mismatch::NotSquare {
            rows: a.num_rows(),
            cols: a.num_cols(),
        });
    }
    if a.num_rows() == 0 {
        return Err(Mismatch::Empty);
    }
    Ok(a.num_rows())
}

/// Evaluates `∏ factors[i](A)^powers[i]`.
///
/// A power of 0 contributes the identity, so `substitute(A, [f], [0]) = I`
/// for any square A. Both preconditions are checked before any arithmetic.
pub fn substitute(
    a: &DenseMatrix<Q>,
    factors: &[DensePoly<Q>],
    powers: &[u32],
) -> Result<DenseMatrix<Q>, MinPolyError> {
    let n = check_square(a)?;
    if factors.len() != powers.len() {
        return Err(Mismatch::LengthMismatch {
            factors: factors.len(),
            powers: powers.len(),
        }
        .into());
    }

    let mut acc = DenseMatrix::identity(n);
    for (f, &p) in factors.iter().zip(powers) {
        if p == 0 {
            continue;
        }
        let value = evaluate(a, f).pow(p);
        trace!("({f})^{p} evaluated, zero: {}", value.is_zero());
        acc = acc.mm(&value);
    }

    Ok(acc)
}

/// Evaluates `f(A) = Σ c_k A^k` over the non-zero terms of `f`.
///
/// `A^0` is the identity for every A, singular included.
#[must_use]
pub fn evaluate(a: &DenseMatrix<Q>, f: &DensePoly<Q>) -> DenseMatrix<Q> {
    let n = a.num_rows();
    let mut result = DenseMatrix::zeros(n, n);
    let mut power = DenseMatrix::identity(n);
    let mut exp = 0;

    for (k, c) in f.terms() {
        power = power.mm(&a.pow((k - exp) as u32));
        exp = k;
        result = &result + &power.scale(c);
    }

    result
}

/// Substitution with every `fᵢ(A)^e` for `e ≤ mᵢ` computed once.
///
/// The search multiplies many tuples over the same factors, so caching the
/// factor powers leaves one matrix product per factor per candidate.
#[derive(Clone, Debug)]
pub struct PreparedSubstitution {
    identity: DenseMatrix<Q>,
    // powers[i][e] = factors[i](A)^e
    powers: Vec<Vec<DenseMatrix<Q>>>,
}

impl PreparedSubstitution {
    /// Precomputes `fᵢ(A)^e` for `0 ≤ e ≤ max_powers[i]`.
    pub fn new(
        a: &DenseMatrix<Q>,
        factors: &[DensePoly<Q>],
        max_powers: &[u32],
    ) -> Result<Self, MinPolyError> {
        let n = check_square(a)?;
        if factors.len() != max_powers.len() {
            return Err(Mismatch::LengthMismatch {
                factors: factors.len(),
                powers: max_powers.len(),
            }
            .into());
        }

        let identity = DenseMatrix::identity(n);
        let powers = factors
            .iter()
            .zip(max_powers)
            .map(|(f, &m)| {
                let base = evaluate(a, f);
                let mut table = vec![identity.clone()];
                for e in 1..=m as usize {
                    let next = table[e - 1].mm(&base);
                    table.push(next);
                }
                table
            })
            .collect();

        Ok(Self { identity, powers })
    }

    /// Evaluates the product for one exponent tuple.
    ///
    /// # Panics
    ///
    /// Panics if the tuple length differs from the number of factors or an
    /// exponent exceeds its precomputed maximum.
    #[must_use]
    pub fn product(&self, exponents: &[u32]) -> DenseMatrix<Q> {
        assert_eq!(exponents.len(), self.powers.len());
        self.powers
            .iter()
            .zip(exponents)
            .filter(|&(_, &e)| e > 0)
            .fold(self.identity.clone(), |acc, (table, &e)| {
                acc.mm(&table[e as usize])
            })
    }
}
