//! Polynomial algorithms.
//!
//! - Euclidean division and GCD over a field
//! - Content and primitive part over a Euclidean domain
//! - Squarefree decomposition

pub mod gcd;
pub mod squarefree;
