//! Cantor-Zassenhaus algorithm for polynomial factorization over Z/pZ.
//!
//! Distinct-degree factorization groups the irreducible factors of a
//! squarefree polynomial by degree; equal-degree factorization then splits
//! each group with random polynomials. The prime is odd and chosen at run
//! time, so residues are plain `u64`s interpreted through a [`PrimeField`].

use rand::Rng;
use spectra_integers::PrimeField;

/// A polynomial with coefficients in Z/pZ, ascending.
///
/// Trailing zeros are trimmed; the zero polynomial has no coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZpPoly {
    coeffs: Vec<u64>,
}

impl ZpPoly {
    /// Creates a polynomial from reduced residues.
    #[must_use]
    pub fn new(mut coeffs: Vec<u64>) -> Self {
        while coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(c: u64) -> Self {
        Self::new(vec![c])
    }

    /// The indeterminate x.
    #[must_use]
    pub fn x() -> Self {
        Self { coeffs: vec![0, 1] }
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree; the zero polynomial reports 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Leading residue; 0 for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> u64 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    /// Residues, ascending.
    #[must_use]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }
}

/// Factors a squarefree polynomial into monic irreducibles modulo p.
///
/// The leading coefficient is dropped. Constants yield no factors.
pub fn cantor_zassenhaus_factor<R: Rng + ?Sized>(
    field: PrimeField,
    f: &ZpPoly,
    rng: &mut R,
) -> Vec<ZpPoly> {
    if f.degree() == 0 {
        return Vec::new();
    }

    let f = make_monic(field, f);
    if f.degree() == 1 {
        return vec![f];
    }

    let mut factors = Vec::new();
    for (degree, group) in distinct_degree_factorization(field, &f) {
        if group.degree() == degree {
            factors.push(group);
        } else {
            factors.extend(equal_degree_factorization(field, &group, degree, rng));
        }
    }

    factors
}

/// Distinct-degree factorization of a monic squarefree polynomial.
///
/// Returns `(d, g)` pairs where `g` is the product of all irreducible
/// factors of degree `d`.
pub fn distinct_degree_factorization(field: PrimeField, f: &ZpPoly) -> Vec<(usize, ZpPoly)> {
    let x = ZpPoly::x();
    let mut result = Vec::new();
    let mut h = f.clone();
    let mut x_pow = x.clone();
    let mut d = 0;

    while h.degree() >= 2 * (d + 1) {
        d += 1;
        // x^(p^d) mod h
        x_pow = pow_mod(field, &x_pow, field.modulus(), &h);

        let g = poly_gcd(field, &h, &poly_sub(field, &x_pow, &x));
        if g.degree() > 0 {
            h = poly_div_rem(field, &h, &g).0;
            x_pow = poly_div_rem(field, &x_pow, &h).1;
            result.push((d, g));
        }
    }

    if h.degree() > 0 {
        result.push((h.degree(), h));
    }

    result
}

/// Splits a monic product of irreducibles of degree `d` into its factors.
pub fn equal_degree_factorization<R: Rng + ?Sized>(
    field: PrimeField,
    f: &ZpPoly,
    d: usize,
    rng: &mut R,
) -> Vec<ZpPoly> {
    let mut pending = vec![f.clone()];
    let mut factors = Vec::with_capacity(f.degree() / d.max(1));

    while let Some(g) = pending.pop() {
        if g.degree() <= d {
            factors.push(g);
            continue;
        }

        let (a, b) = split_equal_degree(field, &g, rng);
        pending.push(a);
        pending.push(b);
    }

    factors
}

/// Finds a non-trivial monic splitting of `f` with random trials.
///
/// Each trial succeeds with probability close to 1/2 for odd p.
fn split_equal_degree<R: Rng + ?Sized>(
    field: PrimeField,
    f: &ZpPoly,
    rng: &mut R,
) -> (ZpPoly, ZpPoly) {
    let p = field.modulus();
    let n = f.degree();
    let exp = (p - 1) / 2;

    loop {
        let a = ZpPoly::new((0..n).map(|_| rng.gen_range(0..p)).collect());
        if a.degree() == 0 {
            continue;
        }

        let g = poly_gcd(field, f, &a);
        if g.degree() > 0 && g.degree() < n {
            let other = make_monic(field, &poly_div_rem(field, f, &g).0);
            return (g, other);
        }

        let b = pow_mod(field, &a, exp, f);
        let g = poly_gcd(field, f, &poly_sub(field, &b, &ZpPoly::constant(1)));
        if g.degree() > 0 && g.degree() < n {
            let other = make_monic(field, &poly_div_rem(field, f, &g).0);
            return (g, other);
        }
    }
}

/// Returns true if gcd(f, f') is constant modulo p.
pub fn is_squarefree(field: PrimeField, f: &ZpPoly) -> bool {
    f.degree() == 0 || poly_gcd(field, f, &derivative(field, f)).degree() == 0
}

/// Formal derivative modulo p.
pub fn derivative(field: PrimeField, f: &ZpPoly) -> ZpPoly {
    let p = field.modulus();
    ZpPoly::new(
        f.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| field.mul(c, i as u64 % p))
            .collect(),
    )
}

/// Sum modulo p.
pub fn poly_add(field: PrimeField, a: &ZpPoly, b: &ZpPoly) -> ZpPoly {
    let len = a.coeffs.len().max(b.coeffs.len());
    ZpPoly::new(
        (0..len)
            .map(|i| field.add(coeff(a, i), coeff(b, i)))
            .collect(),
    )
}

/// Difference modulo p.
pub fn poly_sub(field: PrimeField, a: &ZpPoly, b: &ZpPoly) -> ZpPoly {
    let len = a.coeffs.len().max(b.coeffs.len());
    ZpPoly::new(
        (0..len)
            .map(|i| field.sub(coeff(a, i), coeff(b, i)))
            .collect(),
    )
}

/// Product modulo p (schoolbook).
pub fn poly_mul(field: PrimeField, a: &ZpPoly, b: &ZpPoly) -> ZpPoly {
    if a.is_zero() || b.is_zero() {
        return ZpPoly::zero();
    }

    let mut result = vec![0u64; a.coeffs.len() + b.coeffs.len() - 1];
    for (i, &ai) in a.coeffs.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.coeffs.iter().enumerate() {
            result[i + j] = field.add(result[i + j], field.mul(ai, bj));
        }
    }

    ZpPoly::new(result)
}

/// Quotient and remainder modulo p.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
pub fn poly_div_rem(field: PrimeField, a: &ZpPoly, b: &ZpPoly) -> (ZpPoly, ZpPoly) {
    assert!(!b.is_zero(), "division by zero polynomial");

    if a.coeffs.len() < b.coeffs.len() {
        return (ZpPoly::zero(), a.clone());
    }

    let lead_inv = inverse(field, b.leading_coeff());
    let divisor = &b.coeffs;
    let mut remainder = a.coeffs.clone();
    let mut quotient = vec![0u64; a.coeffs.len() - divisor.len() + 1];

    for shift in (0..quotient.len()).rev() {
        let top = remainder[shift + divisor.len() - 1];
        if top == 0 {
            continue;
        }

        let q = field.mul(top, lead_inv);
        for (i, &d) in divisor.iter().enumerate() {
            remainder[shift + i] = field.sub(remainder[shift + i], field.mul(q, d));
        }
        quotient[shift] = q;
    }

    remainder.truncate(divisor.len() - 1);
    (ZpPoly::new(quotient), ZpPoly::new(remainder))
}

/// Monic GCD modulo p.
pub fn poly_gcd(field: PrimeField, a: &ZpPoly, b: &ZpPoly) -> ZpPoly {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = poly_div_rem(field, &a, &b).1;
        a = b;
        b = r;
    }

    make_monic(field, &a)
}

/// Scales to leading coefficient 1.
pub fn make_monic(field: PrimeField, f: &ZpPoly) -> ZpPoly {
    let lead = f.leading_coeff();
    if lead <= 1 {
        return f.clone();
    }

    let lead_inv = inverse(field, lead);
    ZpPoly::new(f.coeffs.iter().map(|&c| field.mul(c, lead_inv)).collect())
}

/// Computes `a^exp mod f` by repeated squaring.
pub fn pow_mod(field: PrimeField, a: &ZpPoly, mut exp: u64, f: &ZpPoly) -> ZpPoly {
    let mut result = poly_div_rem(field, &ZpPoly::constant(1), f).1;
    let mut base = poly_div_rem(field, a, f).1;

    while exp > 0 {
        if exp & 1 == 1 {
            result = poly_div_rem(field, &poly_mul(field, &result, &base), f).1;
        }
        exp >>= 1;
        if exp > 0 {
            base = poly_div_rem(field, &poly_mul(field, &base, &base), f).1;
        }
    }

    result
}

fn coeff(f: &ZpPoly, i: usize) -> u64 {
    f.coeffs.get(i).copied().unwrap_or(0)
}

// Fermat inverse; `a` is a non-zero residue.
fn inverse(field: PrimeField, a: u64) -> u64 {
    field.pow(a, field.modulus() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn gf7() -> PrimeField {
        PrimeField::new(7)
    }

    fn zp(coeffs: &[i64]) -> ZpPoly {
        ZpPoly::new(coeffs.iter().map(|&c| c.rem_euclid(7) as u64).collect())
    }

    fn product(field: PrimeField, factors: &[ZpPoly]) -> ZpPoly {
        factors
            .iter()
            .fold(ZpPoly::constant(1), |acc, f| poly_mul(field, &acc, f))
    }

    #[test]
    fn test_factor_linear() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let factors = cantor_zassenhaus_factor(gf7(), &zp(&[1, 1]), &mut rng);
        assert_eq!(factors, vec![zp(&[1, 1])]);
    }

    #[test]
    fn test_factor_two_linears() {
        // x^2 + 3x + 2 = (x + 1)(x + 2)
        let f = zp(&[2, 3, 1]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let factors = cantor_zassenhaus_factor(gf7(), &f, &mut rng);

        assert_eq!(factors.len(), 2);
        assert_eq!(product(gf7(), &factors), f);
    }

    #[test]
    fn test_factor_cubic() {
        // x (x + 1)(x + 2)
        let f = product(gf7(), &[zp(&[0, 1]), zp(&[1, 1]), zp(&[2, 1])]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let factors = cantor_zassenhaus_factor(gf7(), &f, &mut rng);

        assert_eq!(factors.len(), 3);
        assert!(factors.iter().all(|g| g.degree() == 1));
        assert_eq!(product(gf7(), &factors), f);
    }

    #[test]
    fn test_irreducible_quadratic() {
        // -1 is not a square mod 7
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let factors = cantor_zassenhaus_factor(gf7(), &zp(&[1, 0, 1]), &mut rng);
        assert_eq!(factors, vec![zp(&[1, 0, 1])]);
    }

    #[test]
    fn test_distinct_degree_groups() {
        // (x^2 + 1)(x + 1)(x + 3)
        let f = product(gf7(), &[zp(&[1, 0, 1]), zp(&[1, 1]), zp(&[3, 1])]);
        let groups = distinct_degree_factorization(gf7(), &f);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], (1, product(gf7(), &[zp(&[1, 1]), zp(&[3, 1])])));
        assert_eq!(groups[1], (2, zp(&[1, 0, 1])));
    }

    #[test]
    fn test_squarefree_mod_p() {
        assert!(is_squarefree(gf7(), &zp(&[2, 3, 1])));
        // (x + 1)^2
        assert!(!is_squarefree(gf7(), &zp(&[1, 2, 1])));
    }

    #[test]
    fn test_div_rem() {
        // x^3 + 1 = (x + 1)(x^2 - x + 1)
        let (q, r) = poly_div_rem(gf7(), &zp(&[1, 0, 0, 1]), &zp(&[1, 1]));
        assert_eq!(q, zp(&[1, -1, 1]));
        assert!(r.is_zero());
    }
}
