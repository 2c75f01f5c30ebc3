//! # spectra-integers
//!
//! Exact scalar arithmetic for the spectra workspace.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`) with literal parsing
//! - Residue arithmetic modulo a run-time prime (`PrimeField`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::cast_possible_truncation)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{is_prime, next_prime, PrimeField};
pub use rational::{ParseRationalError, Rational};
