//! The field of rational numbers Q.

use std::str::FromStr;

use crate::traits::{EuclideanDomain, Field, OrderedRing, Ring};
use spectra_integers::{Integer, ParseRationalError, Rational};

/// The field of rational numbers, the scalar field of every matrix.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates `num/den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates an integral rational.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }

    /// Numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// Positive denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(&self.0)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(&self.0)
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }
}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0.clone() / other.0.clone()), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        self.0.checked_recip().map(Self)
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl From<Integer> for Q {
    fn from(value: Integer) -> Self {
        Self(Rational::from_integer(value))
    }
}

impl FromStr for Q {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
