//! # zpoly-rings
//!
//! Algebraic structures for zpoly.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - The integers `Z`, the coefficient ring of the division kernels
//! - Prime fields `FiniteField<P>`, used as exact domains for linear algebra
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod traits;

pub use finite_field::{FiniteField, GF998244353};
pub use integers::Z;
pub use traits::{EuclideanDomain, Field, Ring};
