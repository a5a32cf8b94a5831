//! # zpoly-integers
//!
//! Exact integer arithmetic for zpoly.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision signed integers (`Integer`), the coefficient type
//!   of integer polynomials
//! - Residues modulo a compile-time prime (`ModInt`)
//!
//! Small values stay inline; large values are heap-allocated limb vectors,
//! so every operation is exact and never overflows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::ModInt;
