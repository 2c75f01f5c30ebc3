//! Zassenhaus factorization of squarefree primitive polynomials over Z.
//!
//! A single prime `p` is chosen with `p > 2B`, where `B` bounds the
//! coefficients of `lc(f) * g / lc(g)` for every factor `g` of `f`
//! (Mignotte). Factoring modulo such a prime and lifting products of
//! modular factors to the symmetric range recovers every true factor
//! directly; candidates are confirmed by exact division over Z.

use log::debug;
use rand::Rng;
use spectra_integers::{next_prime, Integer, PrimeField};
use spectra_poly::algorithms::gcd::primitive_part;
use spectra_poly::dense::DensePoly;
use spectra_rings::integers::Z;
use spectra_rings::traits::{EuclideanDomain, OrderedRing, Ring};

use crate::cantor_zassenhaus::{cantor_zassenhaus_factor, is_squarefree, poly_mul, ZpPoly};
use crate::error::{FactorError, MAX_PRIME_BITS};

/// Factors a squarefree primitive polynomial with positive leading
/// coefficient into irreducibles over Z.
///
/// Factors are primitive with positive leading coefficients, in the order
/// they were found.
pub fn factor_squarefree<R: Rng + ?Sized>(
    f: &DensePoly<Z>,
    rng: &mut R,
) -> Result<Vec<DensePoly<Z>>, FactorError> {
    if f.degree() <= 1 {
        return Ok(vec![f.clone()]);
    }

    let field = choose_prime(f)?;
    let mut modular = cantor_zassenhaus_factor(field, &reduce_mod_p(field, f), rng);
    debug!(
        "degree {} splits into {} factors modulo {}",
        f.degree(),
        modular.len(),
        field.modulus()
    );

    if modular.len() <= 1 {
        return Ok(vec![f.clone()]);
    }

    let mut remaining = f.clone();
    let mut found = Vec::new();
    let mut size = 1;

    while 2 * size <= modular.len() {
        let mut subset: Vec<usize> = (0..size).collect();
        let mut hit = None;

        loop {
            if let Some(split) = try_subset(field, &remaining, &modular, &subset) {
                hit = Some(split);
                break;
            }
            if !next_subset(&mut subset, modular.len()) {
                break;
            }
        }

        match hit {
            Some((factor, quotient)) => {
                found.push(factor);
                remaining = quotient;
                for &i in subset.iter().rev() {
                    modular.remove(i);
                }
            }
            None => size += 1,
        }
    }

    found.push(remaining);
    Ok(found)
}

/// Number of bits a prime must exceed for the symmetric lift to be exact.
pub fn prime_bits(f: &DensePoly<Z>) -> u32 {
    let sum_squares = f
        .coeffs()
        .iter()
        .fold(Integer::new(0), |acc, c| acc + c.as_inner() * c.as_inner());
    let norm_bits = sum_squares.bit_len().div_ceil(2);
    let lead_bits = f.leading_coeff().as_inner().bit_len();

    // |lc| * 2^n * ||f||_2, doubled
    let bits = lead_bits + f.degree() + norm_bits + 1;
    u32::try_from(bits).unwrap_or(u32::MAX)
}

/// Picks the smallest prime above the coefficient bound that keeps the
/// leading coefficient non-zero and the polynomial squarefree.
pub fn choose_prime(f: &DensePoly<Z>) -> Result<PrimeField, FactorError> {
    let bits = prime_bits(f);
    if bits > MAX_PRIME_BITS {
        return Err(FactorError::CoefficientBoundTooLarge { bits });
    }

    let limit = 1u64 << (MAX_PRIME_BITS + 1);
    let mut candidate = next_prime(1u64 << bits);

    while let Some(p) = candidate.filter(|&p| p < limit) {
        let field = PrimeField::new(p);
        let reduced = reduce_mod_p(field, f);
        if reduced.degree() == f.degree() && is_squarefree(field, &reduced) {
            debug!("chose prime {p} ({bits}-bit bound)");
            return Ok(field);
        }
        candidate = next_prime(p);
    }

    Err(FactorError::CoefficientBoundTooLarge { bits })
}

fn reduce_mod_p(field: PrimeField, f: &DensePoly<Z>) -> ZpPoly {
    ZpPoly::new(f.coeffs().iter().map(|c| field.reduce(c.as_inner())).collect())
}

fn lift_symmetric(field: PrimeField, g: &ZpPoly) -> DensePoly<Z> {
    DensePoly::new(g.coeffs().iter().map(|&c| Z(field.symmetric(c))).collect())
}

// Builds lc(f) * (product of the chosen modular factors), lifts it and
// tests it by exact division.
fn try_subset(
    field: PrimeField,
    f: &DensePoly<Z>,
    modular: &[ZpPoly],
    subset: &[usize],
) -> Option<(DensePoly<Z>, DensePoly<Z>)> {
    let lead = ZpPoly::constant(field.reduce(f.leading_coeff().as_inner()));
    let product = subset
        .iter()
        .fold(lead, |acc, &i| poly_mul(field, &acc, &modular[i]));

    let mut candidate = primitive_part(&lift_symmetric(field, &product));
    if candidate.leading_coeff().signum() < 0 {
        candidate = candidate.neg();
    }
    if candidate.degree() == 0 || candidate.degree() >= f.degree() {
        return None;
    }

    poly_div_exact(f, &candidate).map(|q| (candidate, q))
}

/// Exact division over Z; `None` if `b` does not divide `a`.
pub fn poly_div_exact(a: &DensePoly<Z>, b: &DensePoly<Z>) -> Option<DensePoly<Z>> {
    if b.is_zero() || b.degree() > a.degree() {
        return None;
    }

    let divisor = b.coeffs();
    let lead = b.leading_coeff();
    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![Z::zero(); a.degree() - b.degree() + 1];

    for shift in (0..quotient.len()).rev() {
        let top = &remainder[shift + divisor.len() - 1];
        if top.is_zero() {
            continue;
        }

        let (q, r) = top.div_rem(lead);
        if !r.is_zero() {
            return None;
        }

        for (i, d) in divisor.iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - q.clone() * d.clone();
        }
        quotient[shift] = q;
    }

    remainder
        .iter()
        .all(Ring::is_zero)
        .then(|| DensePoly::new(quotient))
}

// Advances to the next k-subset of 0..n in lexicographic order.
fn next_subset(subset: &mut [usize], n: usize) -> bool {
    let k = subset.len();
    for i in (0..k).rev() {
        if subset[i] < n - k + i {
            subset[i] += 1;
            for j in i + 1..k {
                subset[j] = subset[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn poly(coeffs: &[i64]) -> DensePoly<Z> {
        DensePoly::new(coeffs.iter().map(|&c| Z::new(c)).collect())
    }

    fn factor(f: &DensePoly<Z>) -> Vec<DensePoly<Z>> {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut factors = factor_squarefree(f, &mut rng).unwrap();
        factors.sort_by(|a, b| {
            a.degree()
                .cmp(&b.degree())
                .then_with(|| a.coeffs().cmp(b.coeffs()))
        });
        factors
    }

    #[test]
    fn test_factor_two_linears() {
        // x^2 - 1
        assert_eq!(factor(&poly(&[-1, 0, 1])), vec![poly(&[-1, 1]), poly(&[1, 1])]);
    }

    #[test]
    fn test_factor_non_monic() {
        // 6x^2 + x - 2 = (2x - 1)(3x + 2)
        assert_eq!(factor(&poly(&[-2, 1, 6])), vec![poly(&[-1, 2]), poly(&[2, 3])]);
    }

    #[test]
    fn test_x4_plus_1_is_irreducible() {
        // Splits modulo every prime, so recombination must reject all pairs
        assert_eq!(factor(&poly(&[1, 0, 0, 0, 1])), vec![poly(&[1, 0, 0, 0, 1])]);
    }

    #[test]
    fn test_factor_quadratics() {
        // (x^2 + 1)(x^2 - 2)
        let f = poly(&[1, 0, 1]).mul(&poly(&[-2, 0, 1]));
        assert_eq!(factor(&f), vec![poly(&[-2, 0, 1]), poly(&[1, 0, 1])]);
    }

    #[test]
    fn test_poly_div_exact() {
        let f = poly(&[-2, 1, 6]);
        assert_eq!(poly_div_exact(&f, &poly(&[-1, 2])), Some(poly(&[2, 3])));
        assert_eq!(poly_div_exact(&f, &poly(&[1, 2])), None);
    }

    #[test]
    fn test_next_subset() {
        let mut subset = vec![0, 1];
        let mut seen = vec![subset.clone()];
        while next_subset(&mut subset, 4) {
            seen.push(subset.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_bound_too_large() {
        let huge = DensePoly::new(vec![Z(Integer::new(1) * Integer::new(2).pow(60)), Z::new(1), Z::new(1)]);
        assert!(matches!(
            choose_prime(&huge),
            Err(FactorError::CoefficientBoundTooLarge { .. })
        ));
    }
}
