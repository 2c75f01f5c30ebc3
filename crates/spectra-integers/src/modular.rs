//! Arithmetic modulo a word-sized prime chosen at run time.
//!
//! Factorization over Q reduces a polynomial modulo a prime that depends on
//! the size of its coefficients, so the modulus cannot be a const generic.

use crate::Integer;

/// Residue arithmetic in Z/pZ for a prime `p < 2^63`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Creates the field of residues modulo `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not prime or does not fit in 63 bits.
    #[must_use]
    pub fn new(p: u64) -> Self {
        assert!(p < 1 << 63, "modulus must fit in 63 bits");
        assert!(is_prime(p), "modulus must be prime");
        Self { p }
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        self.p
    }

    /// Reduces an arbitrary integer into `[0, p)`.
    #[must_use]
    pub fn reduce(self, n: &Integer) -> u64 {
        n.rem_euclid_u64(self.p)
    }

    /// Maps a residue to its representative in `(-p/2, p/2]`.
    #[must_use]
    pub fn symmetric(self, a: u64) -> Integer {
        if a > self.p / 2 {
            Integer::from(a) - Integer::from(self.p)
        } else {
            Integer::from(a)
        }
    }

    #[must_use]
    pub fn add(self, a: u64, b: u64) -> u64 {
        let s = u128::from(a) + u128::from(b);
        (s % u128::from(self.p)) as u64
    }

    #[must_use]
    pub fn sub(self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            self.p - (b - a)
        }
    }

    #[must_use]
    pub fn neg(self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    #[must_use]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        mul_mod(a, b, self.p)
    }

    /// Computes a^exp.
    #[must_use]
    pub fn pow(self, a: u64, exp: u64) -> u64 {
        pow_mod(a, exp, self.p)
    }

    /// Multiplicative inverse, `None` for zero.
    #[must_use]
    pub fn inv(self, a: u64) -> Option<u64> {
        if a % self.p == 0 {
            return None;
        }

        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (i128::from(self.p), i128::from(a % self.p));
        while new_r != 0 {
            let q = r / new_r;
            (t, new_t) = (new_t, t - q * new_t);
            (r, new_r) = (new_r, r - q * new_r);
        }

        Some(t.rem_euclid(i128::from(self.p)) as u64)
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic Miller-Rabin test, exact for every u64.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &w in &WITNESSES {
        if n % w == 0 {
            return n == w;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Smallest prime strictly greater than `n`, if one fits in a u64.
#[must_use]
pub fn next_prime(n: u64) -> Option<u64> {
    let mut candidate = n.checked_add(1)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}
