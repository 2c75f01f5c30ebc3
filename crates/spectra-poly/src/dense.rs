//! Dense univariate polynomials.
//!
//! Characteristic and minimal polynomials of small matrices have low degree,
//! so a coefficient vector with schoolbook multiplication is all that is
//! needed here.

use std::fmt;

use spectra_integers::{Integer, Rational};
use spectra_rings::traits::{Field, OrderedRing, Ring};
use spectra_rings::{Q, Z};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with trailing zeros
/// trimmed; the zero polynomial is the single coefficient `0`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from ascending coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Builds a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// Repeated exponents are summed.
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (usize, R)>,
    {
        let mut coeffs: Vec<R> = Vec::new();
        for (exp, c) in terms {
            if coeffs.len() <= exp {
                coeffs.resize(exp + 1, R::zero());
            }
            coeffs[exp] = coeffs[exp].clone() + c;
        }
        Self::new(coeffs)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// The indeterminate x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// The linear polynomial `x - root`.
    #[must_use]
    pub fn x_minus(root: R) -> Self {
        Self::new(vec![-root, R::one()])
    }

    /// The monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Degree; the zero polynomial reports 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true for non-zero constants.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() == 1 && !self.coeffs[0].is_zero()
    }

    /// Leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns true if the leading coefficient is 1.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// All coefficients, ascending.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Sparse view: the non-zero `(exponent, coefficient)` terms, ascending.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &R)> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
    }

    /// Evaluates at a point with Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Sum of two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(coeffs)
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Difference of two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) - other.coeff(i)).collect();
        Self::new(coeffs)
    }

    /// Product of two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.clone() * R::from_i64(i as i64))
            .collect();

        Self::new(coeffs)
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Maps every coefficient into another ring.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, f: impl FnMut(&R) -> S) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }
}

impl<F: Field> DensePoly<F> {
    /// Scales to leading coefficient 1; the zero polynomial is returned as is.
    #[must_use]
    pub fn monic(&self) -> Self {
        crate::algorithms::gcd::make_monic(self)
    }

    /// Quotient and remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        crate::algorithms::gcd::poly_div_rem(self, divisor)
    }

    /// Returns true if `self` divides `other` exactly.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        other.div_rem(self).1.is_zero()
    }
}

impl DensePoly<Q> {
    /// Clears denominators and content.
    ///
    /// Returns `(c, g)` with `self = c * g`, where `g` has coprime integer
    /// coefficients and a positive leading coefficient. The zero polynomial
    /// maps to `(0, 0)`.
    #[must_use]
    pub fn to_primitive_integer(&self) -> (Q, DensePoly<Z>) {
        if self.is_zero() {
            return (Q::zero(), DensePoly::zero());
        }

        let denom = self
            .coeffs
            .iter()
            .fold(Integer::new(1), |acc, c| acc.lcm(&c.denominator()));

        let scaled: Vec<Integer> = self
            .coeffs
            .iter()
            .map(|c| c.numerator() * (&denom / &c.denominator()))
            .collect();

        let mut content = scaled
            .iter()
            .filter(|c| c.signum() != 0)
            .fold(Integer::new(0), |acc, c| acc.gcd(c));
        if scaled.last().is_some_and(Integer::is_negative) {
            content = -content;
        }

        let primitive = scaled.iter().map(|c| Z(c / &content)).collect();
        let unit = Q(Rational::new(content, denom));
        (unit, DensePoly::new(primitive))
    }
}

impl DensePoly<Z> {
    /// Embeds an integer polynomial into Q[x].
    #[must_use]
    pub fn to_rational(&self) -> DensePoly<Q> {
        self.map_coeffs(|c| Q::from(c.as_inner().clone()))
    }
}

impl<R: Ring> Default for DensePoly<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: OrderedRing + fmt::Display> DensePoly<R> {
    /// Formats the polynomial in the named indeterminate.
    ///
    /// ```ignore
    /// let p = DensePoly::new(vec![Q::from_integer(2), Q::from_integer(-3), Q::one()]);
    /// assert_eq!(p.display_in("t").to_string(), "t^2 - 3t + 2");
    /// ```
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> PolyDisplay<'a, R> {
        PolyDisplay { poly: self, var }
    }
}

/// Human-readable rendering of a [`DensePoly`], highest degree first.
pub struct PolyDisplay<'a, R: Ring> {
    poly: &'a DensePoly<R>,
    var: &'a str,
}

impl<R: OrderedRing + fmt::Display> fmt::Display for PolyDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<(usize, &R)> = self.poly.terms().collect();
        for (idx, (exp, c)) in terms.into_iter().rev().enumerate() {
            let negative = c.signum() < 0;
            match (idx, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let magnitude = c.abs();
            if exp == 0 {
                write!(f, "{magnitude}")?;
                continue;
            }

            if !magnitude.is_one() {
                let text = magnitude.to_string();
                if text.contains('/') {
                    write!(f, "({text})")?;
                } else {
                    write!(f, "{text}")?;
                }
            }

            match exp {
                1 => write!(f, "{}", self.var)?,
                _ => write!(f, "{}^{exp}", self.var)?,
            }
        }

        Ok(())
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in("x"))
    }
}
