//! Prime fields Z_p.

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
use zpoly_integers::ModInt;

/// The prime field Z_p.
///
/// Wraps `ModInt<P>`; `P` must be prime for the field laws to hold.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(pub ModInt<P>);

impl<const P: u64> FiniteField<P> {
    /// Creates a field element from its representative.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(ModInt::new(value))
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self(ModInt::from_signed(value))
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.value()
    }

    /// Returns the characteristic `P`.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(ModInt::new(0))
    }

    fn one() -> Self {
        Self(ModInt::new(1))
    }

    fn is_zero(&self) -> bool {
        self.0.value() == 0
    }

    fn is_one(&self) -> bool {
        self.0.value() == 1
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}
impl<const P: u64> IntegralDomain for FiniteField<P> {}

impl<const P: u64> EuclideanDomain for FiniteField<P> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0 / other.0), Self::zero())
    }

    fn exact_div(&self, other: &Self) -> Option<Self> {
        other.0.inv().map(|inv| Self(self.0 * inv))
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        self.0.inv().map(Self)
    }
}

impl<const P: u64> std::ops::Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<const P: u64> std::ops::Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<const P: u64> std::ops::Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<const P: u64> std::ops::Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> std::fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The NTT-friendly prime field used throughout the tests and benches.
pub type GF998244353 = FiniteField<998_244_353>;

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = FiniteField<7>;

    #[test]
    fn test_field_ops() {
        let a = F7::new(5);
        let b = F7::new(4);

        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((a * b).value(), 6);
    }

    #[test]
    fn test_exact_div_is_field_division() {
        let a = F7::new(5);
        let b = F7::new(3);
        let c = a.exact_div(&b).unwrap();
        assert_eq!(c * b, a);
        assert_eq!(a.exact_div(&F7::zero()), None);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(F7::new(3).inv(), Some(F7::new(5)));
        assert_eq!(F7::zero().inv(), None);
    }
}
