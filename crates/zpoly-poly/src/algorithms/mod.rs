//! Polynomial algorithms.
//!
//! This module contains the coefficient-slice kernels behind `DensePoly`:
//! - Karatsuba multiplication, with rayon-parallel sub-products
//! - Balanced division: schoolbook and recursive
//! - Divide-and-conquer division for arbitrary length ratios

pub mod basecase;
pub mod divconquer;
pub mod karatsuba;

pub use basecase::{divrem_schoolbook, BalancedDivider, RecursiveDivider, SchoolbookDivider};
pub use divconquer::{divrem_divconquer, divrem_divconquer_with, DivRemConfig};
pub use karatsuba::{karatsuba_mul, KaratsubaMultiplier, Multiplier};
