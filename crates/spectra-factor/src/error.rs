//! Factorization errors.

use thiserror::Error;

/// Largest prime size the modular factorization works with.
pub const MAX_PRIME_BITS: u32 = 61;

/// Errors that can occur while factoring over Q.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FactorError {
    #[error("cannot factor the zero polynomial")]
    ZeroPolynomial,

    #[error("coefficient bound needs a {bits}-bit prime, at most {MAX_PRIME_BITS} bits are supported")]
    CoefficientBoundTooLarge {
        /// Bits the modular method would need.
        bits: u32,
    },
}
