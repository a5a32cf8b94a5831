//! Algebraic structure traits.
//!
//! The polynomial and matrix kernels are written against these traits
//! rather than a concrete coefficient type.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;
}

/// A ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A commutative ring with no zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// A domain with division with remainder.
///
/// For any a, b with b ≠ 0 there exist q, r such that a = b*q + r and
/// either r = 0 or r is smaller than b under the domain's Euclidean
/// function.
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Returns the quotient when `other` divides `self` exactly.
    ///
    /// Returns `None` when `other` is zero or the division leaves a
    /// remainder. Polynomial division over the domain uses this for every
    /// quotient coefficient.
    fn exact_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let (q, r) = self.div_rem(other);
        r.is_zero().then_some(q)
    }
}

/// A ring where every non-zero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}
