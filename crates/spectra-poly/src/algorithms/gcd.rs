//! Division with remainder and GCD.

use spectra_rings::traits::{EuclideanDomain, Field};

use crate::dense::DensePoly;

/// Monic GCD over a field via the Euclidean algorithm.
///
/// `gcd(0, 0)` is the zero polynomial.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// Divides `a` by `b` over a field, returning (quotient, remainder).
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    assert!(!b.is_zero(), "division by zero polynomial");

    if a.is_zero() || a.degree() < b.degree() {
        return (DensePoly::zero(), a.clone());
    }

    let divisor = b.coeffs();
    let lead_inv = b
        .leading_coeff()
        .inv()
        .expect("non-zero field element is invertible");
    let mut quotient = vec![F::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    for shift in (0..quotient.len()).rev() {
        let top = remainder[shift + divisor.len() - 1].clone();
        if top.is_zero() {
            continue;
        }

        let q = top * lead_inv.clone();
        for (i, d) in divisor.iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - q.clone() * d.clone();
        }
        quotient[shift] = q;
    }

    remainder.truncate(divisor.len() - 1);
    (DensePoly::new(quotient), DensePoly::new(remainder))
}

/// Scales a polynomial to leading coefficient 1.
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    if p.is_zero() || p.is_monic() {
        return p.clone();
    }

    let lead_inv = p
        .leading_coeff()
        .inv()
        .expect("non-zero field element is invertible");
    p.scale(&lead_inv)
}

/// Content: GCD of all coefficients.
pub fn content<R: EuclideanDomain>(p: &DensePoly<R>) -> R {
    p.coeffs()
        .iter()
        .cloned()
        .reduce(|a, b| a.gcd(&b))
        .unwrap_or_else(R::zero)
}

/// Primitive part: the polynomial divided by its content.
pub fn primitive_part<R: EuclideanDomain>(p: &DensePoly<R>) -> DensePoly<R> {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }

    DensePoly::new(p.coeffs().iter().map(|x| x.div(&c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectra_rings::rationals::Q;
    use spectra_rings::traits::Ring;
    use spectra_rings::Z;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_div_rem_exact() {
        // (x^2 + 2x + 1) / (x + 1) = x + 1
        let (q, r) = poly_div_rem(&poly(&[1, 2, 1]), &poly(&[1, 1]));
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_with_remainder() {
        // x^3 + 1 = (x - 1)(x^2 + x + 1) + 2
        let (q, r) = poly_div_rem(&poly(&[1, 0, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(q, poly(&[1, 1, 1]));
        assert_eq!(r, poly(&[2]));
    }

    #[test]
    fn test_div_rem_non_monic_divisor() {
        // (2x^2 + 3x + 1) / (2x + 1) = x + 1
        let (q, r) = poly_div_rem(&poly(&[1, 3, 2]), &poly(&[1, 2]));
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn test_gcd() {
        // gcd((x-1)(x+1), (x-1)^2) = x - 1
        let g = poly_gcd(&poly(&[-1, 0, 1]), &poly(&[1, -2, 1]));
        assert_eq!(g, poly(&[-1, 1]));

        // coprime
        let g = poly_gcd(&poly(&[1, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(g, DensePoly::one());
    }

    #[test]
    fn test_make_monic() {
        let p = poly(&[2, 4]);
        assert_eq!(make_monic(&p), DensePoly::new(vec![Q::new(1, 2), Q::one()]));
    }

    #[test]
    fn test_primitive_part_over_z() {
        let p = DensePoly::new(vec![Z::new(6), Z::new(-9), Z::new(3)]);
        assert_eq!(content(&p), Z::new(3));
        assert_eq!(
            primitive_part(&p),
            DensePoly::new(vec![Z::new(2), Z::new(-3), Z::new(1)])
        );
    }
}
