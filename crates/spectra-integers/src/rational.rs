//! Arbitrary precision rational numbers.
//!
//! Matrix entries, polynomial coefficients and eigenvalues all live here,
//! so every computation above this crate is exact.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use thiserror::Error;

use crate::Integer;

/// Errors produced when parsing a scalar literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    #[error("empty number literal")]
    Empty,

    #[error("invalid digits in `{0}`")]
    InvalidDigits(String),

    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

/// An arbitrary precision rational number.
///
/// Always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        if negative {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn checked_recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
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

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

/// Accepts `7`, `-3/4`, `+2` and finite decimals such as `1.25` or `-.5`.
impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }

        if let Some((num, den)) = s.split_once('/') {
            let num: Integer = num.parse()?;
            let den: Integer = den.parse()?;
            if den.is_zero() {
                return Err(ParseRationalError::ZeroDenominator(s.to_string()));
            }
            return Ok(Self::new(num, den));
        }

        if let Some((whole, frac)) = s.split_once('.') {
            let (negative, whole) = match whole.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, whole.strip_prefix('+').unwrap_or(whole)),
            };
            let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
            if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
                return Err(ParseRationalError::InvalidDigits(s.to_string()));
            }
            let digits = format!("{whole}{frac}");
            let scaled = Integer::from_str_radix(&digits, 10)?;
            let scale = Integer::new(10).pow(frac.len() as u32);
            let value = Self::new(scaled, scale);
            return Ok(if negative { -value } else { value });
        }

        Ok(Self::from_integer(s.parse()?))
    }
}

macro_rules! rational_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Rational) -> Self::Output {
                Self(self.0 $op &rhs.0)
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Self::Output {
                Rational(&self.0 $op &rhs.0)
            }
        }
    };
}

rational_binop!(Add, add, +);
rational_binop!(Sub, sub, -);
rational_binop!(Mul, mul, *);
rational_binop!(Div, div, /);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
