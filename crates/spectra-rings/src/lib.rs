//! # spectra-rings
//!
//! Algebraic structures for exact matrix algebra.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`, `OrderedRing`
//! - Concrete implementations: `Z` and `Q`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── EuclideanDomain
//!  │    └── Field
//!  └── OrderedRing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{EuclideanDomain, Field, OrderedRing, Ring};
