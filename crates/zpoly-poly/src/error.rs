//! Errors reported by polynomial division.

use thiserror::Error;

/// Errors that can occur during polynomial division.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DivisionError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Some quotient coefficient is not a multiple of the divisor's
    /// leading coefficient, so the quotient does not exist over the domain.
    #[error("leading coefficient of the divisor does not divide the dividend exactly")]
    InexactDivision,
}
