//! # zpoly-poly
//!
//! Dense univariate polynomials and their division kernels.
//!
//! This crate provides:
//! - `DensePoly<R>` over any ring from `zpoly-rings`
//! - Karatsuba multiplication on coefficient slices
//! - Divide-and-conquer division with remainder over Euclidean domains
//!
//! ## Algorithm Selection
//!
//! Division reduces every length ratio to balanced divisions:
//! - Divisor length <= 16: schoolbook O(n²)
//! - Otherwise: recursive halving, cost dominated by Karatsuba products
//!
//! Both cutoffs are carried by [`DivRemConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod vec_ops;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use algorithms::divconquer::{divrem_divconquer, DivRemConfig};
pub use dense::DensePoly;
pub use error::DivisionError;
