//! Polynomial factorization over the rationals.
//!
//! This crate provides:
//! - **Cantor-Zassenhaus**: distinct- and equal-degree factorization modulo
//!   a run-time prime
//! - **Zassenhaus recombination**: lifting modular factors to true factors
//!   over Z with a single large prime
//! - **Factorization over Q**: squarefree decomposition followed by the
//!   modular method, returning monic irreducibles with multiplicities
//!
//! # Parallelism
//!
//! [`factor_batch`] factors independent polynomials with rayon.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

pub mod cantor_zassenhaus;
pub mod error;
pub mod rational;
pub mod univariate;

#[cfg(test)]
mod proptests;

// Re-exports
pub use cantor_zassenhaus::{cantor_zassenhaus_factor, ZpPoly};
pub use error::FactorError;
pub use rational::{
    factor_batch, factor_over_q, factor_over_q_with, FactorConfig, Factorization,
    FactorizationDisplay,
};
pub use univariate::factor_squarefree;
