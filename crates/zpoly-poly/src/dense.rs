//! Dense univariate polynomials.
//!
//! Owned, normalized coefficient vectors on top of the slice kernels in
//! [`crate::algorithms`].

use zpoly_rings::traits::{EuclideanDomain, Ring};

use crate::algorithms::basecase::divrem_schoolbook;
use crate::algorithms::divconquer::{divrem_divconquer, DivRemConfig};
use crate::algorithms::karatsuba::karatsuba_mul;
use crate::error::DivisionError;
use crate::vec_ops::{normalized_len, zeros};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order. The zero polynomial
/// is stored as a single zero coefficient; every other polynomial has a
/// non-zero last coefficient.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        coeffs.truncate(normalized_len(&coeffs));
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = zeros(n + 1);
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) - other.coeff(i)).collect())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = zeros(n);
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }
}

impl<R: Ring + Send + Sync> DensePoly<R> {
    /// Multiplies two polynomials with Karatsuba multiplication.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::new(karatsuba_mul(&self.coeffs, &other.coeffs))
    }
}

impl<R: EuclideanDomain + Send + Sync> DensePoly<R> {
    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero or the quotient is not integral over
    /// the coefficient domain. Use [`Self::try_div_rem`] to handle either.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        match self.try_div_rem(divisor) {
            Ok(qr) => qr,
            Err(err) => panic!("{err}"),
        }
    }

    /// Divides by `divisor` with the default division config.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::DivisionByZero`] for a zero divisor and
    /// [`DivisionError::InexactDivision`] if the divisor's leading
    /// coefficient does not divide some quotient coefficient.
    pub fn try_div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivisionError> {
        self.try_div_rem_with(divisor, &DivRemConfig::default())
    }

    /// Divides by `divisor` with divide-and-conquer division tuned by `config`.
    ///
    /// # Errors
    ///
    /// See [`Self::try_div_rem`].
    pub fn try_div_rem_with(&self, divisor: &Self, config: &DivRemConfig) -> Result<(Self, Self), DivisionError> {
        if divisor.is_zero() {
            return Err(DivisionError::DivisionByZero);
        }
        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let mut q = zeros(self.coeffs.len() - divisor.coeffs.len() + 1);
        let mut r = zeros(self.coeffs.len());
        divrem_divconquer(&mut q, &mut r, &self.coeffs, &divisor.coeffs, config)?;
        Ok((Self::new(q), Self::new(r)))
    }

    /// Divides by `divisor` with classical long division.
    ///
    /// # Errors
    ///
    /// See [`Self::try_div_rem`].
    pub fn div_rem_schoolbook(&self, divisor: &Self) -> Result<(Self, Self), DivisionError> {
        if divisor.is_zero() {
            return Err(DivisionError::DivisionByZero);
        }
        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let mut q = zeros(self.coeffs.len() - divisor.coeffs.len() + 1);
        let mut r = zeros(self.coeffs.len());
        divrem_schoolbook(&mut q, &mut r, &self.coeffs, &divisor.coeffs)?;
        Ok((Self::new(q), Self::new(r)))
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
