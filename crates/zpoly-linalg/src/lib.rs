//! # zpoly-linalg
//!
//! Dense linear algebra for zpoly.
//!
//! This crate provides:
//! - Dense row-major matrices with rayon-parallel products
//! - Classical and recursive upper-triangular solvers over fields
//!
//! ## Algorithm Selection
//!
//! [`solve_triu`] chooses by the shape of the right-hand side:
//! - Fewer than 64 rows or fewer than 64 columns: back substitution
//! - Otherwise: recursive block splitting
//!
//! Both cutoffs are carried by [`TriangularSolveConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod triangular;

pub use dense_matrix::DenseMatrix;
pub use triangular::{
    solve_triu, solve_triu_classical, solve_triu_recursive, solve_triu_with, SolveError, SolveStrategy,
    TriangularSolveConfig,
};

#[cfg(test)]
mod proptests;
