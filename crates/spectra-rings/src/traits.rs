//! Algebraic structure traits.
//!
//! Matrices and polynomials are generic over these traits so that the same
//! code runs over `Z` (primitive integer polynomials during factorization)
//! and over `Q` (everything the user sees).

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// Addition is an abelian group with identity `zero()`, multiplication is
/// associative and commutative with identity `one()`, and multiplication
/// distributes over addition.
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of the integer `n` under the unique ring map Z -> R.
    fn from_i64(n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = Self::one();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A ring with division with remainder.
///
/// For b ≠ 0 there are q, r with a = b*q + r and r "smaller" than b.
pub trait EuclideanDomain: Ring {
    /// Quotient and remainder. May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Greatest common divisor.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a
    }
}

/// A ring where every non-zero element is invertible.
pub trait Field: EuclideanDomain {
    /// Multiplicative inverse, `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

/// A ring with a total order compatible with its arithmetic.
pub trait OrderedRing: Ring + Ord {
    /// Absolute value.
    fn abs(&self) -> Self;

    /// Sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}
