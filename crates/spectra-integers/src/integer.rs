//! Arbitrary precision integers.
//!
//! A thin wrapper around `dashu::IBig` exposing the operations the
//! polynomial and factorization layers need.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::ParseRationalError;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer in the given radix.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseRationalError> {
        IBig::from_str_radix(s, radix)
            .map(Self)
            .map_err(|_| ParseRationalError::InvalidDigits(s.to_string()))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Number of bits in the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Greatest common divisor, always non-negative.
    ///
    /// `gcd(a, 0) = |a|`, so `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Converts to an i64 if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Least non-negative residue modulo `m`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn rem_euclid_u64(&self, m: u64) -> u64 {
        assert!(m != 0, "modulus cannot be zero");
        let modulus = IBig::from(m);
        let mut r = &self.0 % &modulus;
        if DashuSigned::is_negative(&r) {
            r += &modulus;
        }
        u64::try_from(r).expect("residue is smaller than the modulus")
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ParseRationalError::Empty);
        }
        Self::from_str_radix(digits, 10)
    }
}

macro_rules! integer_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Self(self.0 $op &rhs.0)
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Self::Output {
                Integer(&self.0 $op &rhs.0)
            }
        }
    };
}

integer_binop!(Add, add, +);
integer_binop!(Sub, sub, -);
integer_binop!(Mul, mul, *);
integer_binop!(Div, div, /);
integer_binop!(Rem, rem, %);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_division() {
        let a = Integer::new(-7);
        let b = Integer::new(2);
        assert_eq!((a.clone() / b.clone()).to_i64(), Some(-3));
        assert_eq!((a % b).to_i64(), Some(-1));
    }

    #[test]
    fn test_rem_euclid() {
        assert_eq!(Integer::new(-7).rem_euclid_u64(5), 3);
        assert_eq!(Integer::new(12).rem_euclid_u64(5), 2);
        assert_eq!(Integer::new(-10).rem_euclid_u64(5), 0);
    }

    #[test]
    fn test_gcd_lcm() {
        let a = Integer::new(-48);
        let b = Integer::new(18);
        assert_eq!(a.gcd(&b).to_i64(), Some(6));
        assert_eq!(a.lcm(&b).to_i64(), Some(144));
    }

    #[test]
    fn test_gcd_with_zero() {
        let zero = Integer::new(0);
        assert_eq!(zero.gcd(&zero), zero);
        assert_eq!(zero.gcd(&Integer::new(-9)).to_i64(), Some(9));
        assert_eq!(Integer::new(-9).gcd(&zero).to_i64(), Some(9));
        assert_eq!(zero.lcm(&Integer::new(4)), zero);
    }

    #[test]
    fn test_parse() {
        assert_eq!("+42".parse::<Integer>().unwrap().to_i64(), Some(42));
        assert_eq!("-17".parse::<Integer>().unwrap().to_i64(), Some(-17));
        assert!("4x".parse::<Integer>().is_err());
        assert_eq!("".parse::<Integer>(), Err(ParseRationalError::Empty));

        let big: Integer = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert_eq!(big.to_i64(), None);
    }
}
