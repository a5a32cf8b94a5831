//! # zpoly
//!
//! Exact polynomial division over the integers, with divide-and-conquer
//! kernels whose cost is dominated by fast multiplication.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: `dashu`-backed integer coefficients
//! - **Divide-and-Conquer Division**: any length ratio reduced to balanced divisions
//! - **Checked Exactness**: non-monic divisors succeed when the quotient is integral
//! - **Triangular Solvers**: classical and recursive, chosen by cutoff
//!
//! ## Quick Start
//!
//! ```rust
//! use zpoly::prelude::*;
//!
//! let a = DensePoly::new(vec![Z::new(1), Z::new(0), Z::new(1)]);
//! let b = DensePoly::new(vec![Z::new(1), Z::new(1)]);
//! let (q, r) = a.div_rem(&b);
//!
//! assert_eq!(q, DensePoly::new(vec![Z::new(-1), Z::new(1)]));
//! assert_eq!(r, DensePoly::constant(Z::new(2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use zpoly_integers as integers;
pub use zpoly_linalg as linalg;
pub use zpoly_poly as poly;
pub use zpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zpoly_integers::Integer;
    pub use zpoly_linalg::{solve_triu, DenseMatrix, SolveError, TriangularSolveConfig};
    pub use zpoly_poly::{divrem_divconquer, DensePoly, DivRemConfig, DivisionError};
    pub use zpoly_rings::{EuclideanDomain, Field, FiniteField, Ring, Z};
}
