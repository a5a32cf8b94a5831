//! Balanced polynomial division.
//!
//! A balanced division divides a dividend of length `2n - 1` by a divisor
//! of length `n`, giving a quotient of length `n`. The divide-and-conquer
//! driver reduces every division to a sequence of these.
//!
//! Instead of the remainder, a balanced divider returns the partial
//! product `B*Q` (length `2n - 1`); the caller subtracts it from whichever
//! window of the dividend it needs. The remainder `A - B*Q` always has its
//! top `n` coefficients equal to zero.

use tracing::instrument;
use zpoly_rings::traits::EuclideanDomain;

use crate::algorithms::karatsuba::{KaratsubaMultiplier, Multiplier};
use crate::error::DivisionError;
use crate::vec_ops::{add_in_place, copy, rsub_in_place, sub_into, zeros};

/// Divisor length at or below which balanced division is done by schoolbook.
pub const DIVREM_DIVCONQUER_CUTOFF: usize = 16;

/// Solves one balanced division.
pub trait BalancedDivider<R> {
    /// Divides `a` (length `2 * b.len() - 1`) by `b`.
    ///
    /// Writes the quotient into `q` (length `b.len()`) and `B*Q` into
    /// `bq` (length `a.len()`). `b` must have a non-zero top coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::InexactDivision`] if some quotient
    /// coefficient is not exactly divisible by the leading coefficient of `b`.
    fn divide_balanced(&self, q: &mut [R], bq: &mut [R], a: &[R], b: &[R]) -> Result<(), DivisionError>;
}

/// Classical long division of `a` by `b` for any `a.len() >= b.len()`.
///
/// Writes the quotient into `q` (length `a.len() - b.len() + 1`) and the
/// remainder into `r` (length `a.len()`, high slots zero).
///
/// # Errors
///
/// Returns [`DivisionError::InexactDivision`] if the leading coefficient of
/// `b` does not divide one of the quotient coefficients.
///
/// # Panics
///
/// Panics if `b` is empty or the window lengths do not match.
pub fn divrem_schoolbook<R: EuclideanDomain>(
    q: &mut [R],
    r: &mut [R],
    a: &[R],
    b: &[R],
) -> Result<(), DivisionError> {
    let len_b = b.len();
    assert!(len_b >= 1, "divisor must have at least one coefficient");
    assert!(a.len() >= len_b, "dividend shorter than divisor");
    assert_eq!(q.len(), a.len() - len_b + 1);
    assert_eq!(r.len(), a.len());

    copy(r, a);
    let lead = &b[len_b - 1];

    for i in (0..q.len()).rev() {
        let top = &r[i + len_b - 1];
        let c = if top.is_zero() {
            R::zero()
        } else {
            top.exact_div(lead).ok_or(DivisionError::InexactDivision)?
        };

        if !c.is_zero() {
            for (rj, bj) in r[i..i + len_b].iter_mut().zip(b) {
                *rj = rj.clone() - c.clone() * bj.clone();
            }
        }
        q[i] = c;
    }

    Ok(())
}

/// Balanced division by classical long division.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchoolbookDivider;

impl<R: EuclideanDomain> BalancedDivider<R> for SchoolbookDivider {
    fn divide_balanced(&self, q: &mut [R], bq: &mut [R], a: &[R], b: &[R]) -> Result<(), DivisionError> {
        assert_eq!(a.len(), 2 * b.len() - 1);
        divrem_schoolbook(q, bq, a, b)?;
        // bq holds the remainder; B*Q = A - R.
        rsub_in_place(bq, a);
        Ok(())
    }
}

/// Recursive balanced division.
///
/// Splits the quotient into a high half and a low half and finds each one
/// with a half-size balanced division on the top coefficients, so the work
/// is dominated by the multiplications that form the partial products.
#[derive(Clone, Debug)]
pub struct RecursiveDivider<M = KaratsubaMultiplier> {
    /// Divisor length at or below which schoolbook division is used.
    pub cutoff: usize,
    /// Multiplier for the partial products.
    pub multiplier: M,
}

impl<M> RecursiveDivider<M> {
    /// Creates a recursive divider with the given schoolbook cutoff.
    #[must_use]
    pub fn new(cutoff: usize, multiplier: M) -> Self {
        Self { cutoff, multiplier }
    }
}

impl Default for RecursiveDivider {
    fn default() -> Self {
        Self::new(DIVREM_DIVCONQUER_CUTOFF, KaratsubaMultiplier::default())
    }
}

impl<R, M> BalancedDivider<R> for RecursiveDivider<M>
where
    R: EuclideanDomain,
    M: Multiplier<R>,
{
    #[instrument(skip_all, level = "trace", fields(len_b = b.len()))]
    fn divide_balanced(&self, q: &mut [R], bq: &mut [R], a: &[R], b: &[R]) -> Result<(), DivisionError> {
        let n = b.len();
        assert_eq!(a.len(), 2 * n - 1);
        assert_eq!(q.len(), n);
        assert_eq!(bq.len(), a.len());

        if n <= self.cutoff.max(1) {
            return SchoolbookDivider.divide_balanced(q, bq, a, b);
        }

        let n2 = n / 2;
        let n1 = n - n2;
        let (q2, q1) = q.split_at_mut(n2);

        // High half: the top n1 quotient coefficients only depend on the
        // top 2*n1 - 1 coefficients of A and the top n1 of B.
        let mut d1q1: Vec<R> = zeros(2 * n1 - 1);
        self.divide_balanced(q1, &mut d1q1, &a[2 * n2..], &b[n2..])?;
        let d2q1 = self.multiplier.mul(q1, &b[..n2]);

        // bq1 = B*q1 = d1q1*x^n2 + d2q1
        let mut bq1: Vec<R> = zeros(n + n1 - 1);
        copy(&mut bq1[..n - 1], &d2q1);
        add_in_place(&mut bq1[n2..], &d1q1);

        // A - x^n2*B*q1 has length n + n2 - 1; its top 2*n2 - 1
        // coefficients determine the low half of the quotient.
        let mut p2: Vec<R> = zeros(2 * n2 - 1);
        sub_into(&mut p2, &a[n1..n + n2 - 1], &bq1[n1 - n2..n - 1]);

        let mut d3q2: Vec<R> = zeros(2 * n2 - 1);
        self.divide_balanced(q2, &mut d3q2, &p2, &b[n1..])?;
        let d4q2 = self.multiplier.mul(&b[..n1], q2);

        // B*Q = x^n2*bq1 + x^n1*d3q2 + d4q2
        copy(&mut bq[..n2], &d4q2[..n2]);
        copy(&mut bq[n2..], &bq1);
        add_in_place(&mut bq[n2..n - 1], &d4q2[n2..]);
        add_in_place(&mut bq[n1..n + n2 - 1], &d3q2);

        Ok(())
    }
}
