//! Divide-and-conquer polynomial division.
//!
//! Reduces a division `A / B` with lengths in any ratio to balanced
//! divisions (dividend length exactly `2*lenB - 1`):
//!
//! - **balanced** (`lenA == 2*lenB - 1`): one balanced division.
//! - **deficient** (`lenA < 2*lenB - 1`): the quotient has `n1 = lenA - lenB + 1`
//!   coefficients, which only depend on the top `2*n1 - 1` coefficients of
//!   `A` and the top `n1` of `B`. One balanced division of that size, then
//!   the low part of `B` times the quotient corrects the remainder.
//! - **excessive** (`lenA > 2*lenB - 1`): divide the top `2*lenB - 1`
//!   coefficients of `A` by `B`, giving the top `lenB` quotient
//!   coefficients. The dividend left over is `lenB` shorter; repeat.
//!
//! The excessive case runs as a loop rather than a self-call, so the stack
//! depth of the driver is constant however long `A` is relative to `B`.

use tracing::{instrument, trace};
use zpoly_rings::traits::{EuclideanDomain, Ring};

use crate::algorithms::basecase::{BalancedDivider, RecursiveDivider, DIVREM_DIVCONQUER_CUTOFF};
use crate::algorithms::karatsuba::{KaratsubaMultiplier, Multiplier, PARALLEL_MUL_THRESHOLD};
use crate::error::DivisionError;
use crate::vec_ops::{add_in_place, copy, rsub_in_place, sub_in_place, sub_into, zeros};

/// Tuning for divide-and-conquer division.
#[derive(Clone, Debug)]
pub struct DivRemConfig {
    /// Divisor length at or below which balanced divisions use schoolbook.
    pub basecase_cutoff: usize,
    /// Operand length from which partial products are computed in parallel.
    pub parallel_threshold: usize,
}

impl Default for DivRemConfig {
    fn default() -> Self {
        Self {
            basecase_cutoff: DIVREM_DIVCONQUER_CUTOFF,
            parallel_threshold: PARALLEL_MUL_THRESHOLD,
        }
    }
}

/// Divides `a` by `b` with the default balanced divider and multiplier.
///
/// See [`divrem_divconquer_with`] for the window contract.
///
/// # Errors
///
/// Returns [`DivisionError::InexactDivision`] if the quotient is not
/// integral over the coefficient domain.
pub fn divrem_divconquer<R>(
    q: &mut [R],
    r: &mut [R],
    a: &[R],
    b: &[R],
    config: &DivRemConfig,
) -> Result<(), DivisionError>
where
    R: EuclideanDomain + Send + Sync,
{
    let multiplier = KaratsubaMultiplier::new(config.parallel_threshold);
    let divider = RecursiveDivider::new(config.basecase_cutoff, multiplier.clone());
    divrem_divconquer_with(q, r, a, b, &divider, &multiplier)
}

/// Divides `a` by `b`, writing the quotient into `q` and the remainder into `r`.
///
/// Window contract:
/// - `b` is non-empty with a non-zero top coefficient
/// - `a.len() >= b.len()`
/// - `q.len() == a.len() - b.len() + 1`
/// - `r.len() == a.len()`; on success the remainder occupies its low
///   `b.len() - 1` slots and every higher slot is zero
///
/// `a` and `b` are only read. On error the contents of `q` and `r` are
/// unspecified.
///
/// # Errors
///
/// Returns [`DivisionError::InexactDivision`] if `divider` meets a quotient
/// coefficient not divisible by the leading coefficient of `b`. This never
/// happens when that coefficient is a unit.
///
/// # Panics
///
/// Panics if the window lengths violate the contract.
#[instrument(skip_all, level = "trace", fields(len_a = a.len(), len_b = b.len()))]
pub fn divrem_divconquer_with<R, D, M>(
    mut q: &mut [R],
    mut r: &mut [R],
    a: &[R],
    b: &[R],
    divider: &D,
    multiplier: &M,
) -> Result<(), DivisionError>
where
    R: Ring,
    D: BalancedDivider<R>,
    M: Multiplier<R>,
{
    let len_b = b.len();
    assert!(len_b >= 1, "divisor must have at least one coefficient");
    assert!(a.len() >= len_b, "dividend shorter than divisor");
    assert_eq!(q.len(), a.len() - len_b + 1);
    assert_eq!(r.len(), a.len());
    debug_assert!(!b[len_b - 1].is_zero(), "divisor is not normalized");

    let balanced = 2 * len_b - 1;
    let mut len_a = a.len();
    // Dividend still to be divided: `a` itself, then the reduced scratch
    // left by each excessive step.
    let mut reduced: Option<Vec<R>> = None;
    // B*q1 for the current top block, reused by every excessive step.
    let mut dq1: Vec<R> = if len_a > balanced { zeros(balanced) } else { Vec::new() };

    while len_a > balanced {
        let shift = len_a - balanced;
        let low = len_a - len_b;
        trace!(len_a, shift, "excessive step");

        {
            let cur = reduced.as_deref().unwrap_or(a);
            divider.divide_balanced(&mut q[shift..], &mut dq1, &cur[shift..], b)?;
            // Top lenB slots of the remainder: cancelled by the balanced step.
            sub_into(&mut r[low..], &cur[low..], &dq1[len_b - 1..]);
        }

        // Only the lenB - 1 coefficients below the top block change; the
        // low shift coefficients pass through untouched.
        let mut next = match reduced.take() {
            Some(buf) => buf,
            None => a[..low].to_vec(),
        };
        next.truncate(low);
        sub_in_place(&mut next[shift..], &dq1[..len_b - 1]);

        reduced = Some(next);
        len_a = low;
        q = &mut std::mem::take(&mut q)[..shift];
        r = &mut std::mem::take(&mut r)[..low];
    }

    let cur = reduced.as_deref().unwrap_or(a);
    if len_a == balanced {
        trace!(len_a, "balanced step");
        divider.divide_balanced(q, r, cur, b)?;
        rsub_in_place(r, cur);
        return Ok(());
    }

    let n1 = len_a - len_b + 1;
    let n2 = len_b - n1;
    trace!(len_a, n1, n2, "deficient step");

    // r is exclusively borrowed and disjoint from a and b, so its top
    // 2*n1 - 1 slots can hold d1*q before the remainder is formed.
    divider.divide_balanced(q, &mut r[n2..], &cur[n2..], &b[n2..])?;

    let d2 = &b[..n2];
    let d2q = if n1 >= n2 {
        multiplier.mul(q, d2)
    } else {
        multiplier.mul(d2, q)
    };

    // r = A - (d1*q*x^n2 + d2*q)
    copy(&mut r[..n2], &d2q[..n2]);
    add_in_place(&mut r[n2..len_b - 1], &d2q[n2..]);
    rsub_in_place(r, cur);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use zpoly_integers::Integer;
    use zpoly_rings::Z;

    use super::*;
    use crate::algorithms::basecase::{divrem_schoolbook, SchoolbookDivider};
    use crate::algorithms::karatsuba::schoolbook_mul;
    use crate::test_support::init_tracing;
    use crate::vec_ops::normalized_len;

    fn z(values: &[i64]) -> Vec<Z> {
        values.iter().copied().map(Z::new).collect()
    }

    fn divide(a: &[Z], b: &[Z], config: &DivRemConfig) -> (Vec<Z>, Vec<Z>) {
        let mut q = zeros(a.len() - b.len() + 1);
        let mut r = zeros(a.len());
        divrem_divconquer(&mut q, &mut r, a, b, config).unwrap();
        (q, r)
    }

    fn reference(a: &[Z], b: &[Z]) -> (Vec<Z>, Vec<Z>) {
        let mut q = zeros(a.len() - b.len() + 1);
        let mut r = zeros(a.len());
        divrem_schoolbook(&mut q, &mut r, a, b).unwrap();
        (q, r)
    }

    fn random_poly(rng: &mut ChaCha8Rng, len: usize, bits: u32) -> Vec<Z> {
        let bound = 1i64 << bits.min(62);
        (0..len).map(|_| Z::new(rng.gen_range(-bound..bound))).collect()
    }

    /// Records `(dividend length, divisor length)` of every balanced call.
    struct CountingDivider {
        calls: RefCell<Vec<(usize, usize)>>,
    }

    impl CountingDivider {
        fn new() -> Self {
            Self { calls: RefCell::new(Vec::new()) }
        }
    }

    impl BalancedDivider<Z> for CountingDivider {
        fn divide_balanced(&self, q: &mut [Z], bq: &mut [Z], a: &[Z], b: &[Z]) -> Result<(), DivisionError> {
            self.calls.borrow_mut().push((a.len(), b.len()));
            SchoolbookDivider.divide_balanced(q, bq, a, b)
        }
    }

    #[test]
    fn test_exact_division_example() {
        // (6 + 7x + 2x^2) / (2 + x) = 3 + 2x
        let (q, r) = divide(&z(&[6, 7, 2]), &z(&[2, 1]), &DivRemConfig::default());
        assert_eq!(q, z(&[3, 2]));
        assert_eq!(normalized_len(&r), 0);
    }

    #[test]
    fn test_remainder_example() {
        // (1 + x^2) / (1 + x) = (x - 1) rem 2
        let (q, r) = divide(&z(&[1, 0, 1]), &z(&[1, 1]), &DivRemConfig::default());
        assert_eq!(q, z(&[-1, 1]));
        assert_eq!(r, z(&[2, 0, 0]));
    }

    #[test]
    fn test_equal_lengths() {
        let a = z(&[5, -3, 8, 7]);
        let b = z(&[1, 2, 0, -1]);
        let (q, r) = divide(&a, &b, &DivRemConfig::default());

        assert_eq!(q, z(&[-7]));
        let expected: Vec<Z> = a
            .iter()
            .zip(&b)
            .map(|(ai, bi)| ai.clone() - q[0].clone() * bi.clone())
            .collect();
        assert_eq!(r, expected);
    }

    #[test]
    fn test_unit_constant_divisor() {
        let a = z(&[4, -9, 0, 12, 3, -1, 7]);
        let (q, r) = divide(&a, &z(&[1]), &DivRemConfig::default());
        assert_eq!(q, a);
        assert_eq!(normalized_len(&r), 0);

        let (q, r) = divide(&a, &z(&[-1]), &DivRemConfig::default());
        assert_eq!(q, a.iter().map(|c| -c.clone()).collect::<Vec<_>>());
        assert_eq!(normalized_len(&r), 0);
    }

    #[test]
    fn test_balanced_boundary_single_call() {
        let b = z(&[3, -1, 4, 1]);
        let a = z(&[2, 7, 1, 8, 2, 8, 1]);
        let divider = CountingDivider::new();
        let mut q = zeros(4);
        let mut r = zeros(7);

        divrem_divconquer_with(&mut q, &mut r, &a, &b, &divider, &KaratsubaMultiplier::default()).unwrap();

        assert_eq!(*divider.calls.borrow(), vec![(7, 4)]);
        assert_eq!((q, r), reference(&a, &b));
    }

    #[test]
    fn test_excessive_boundary_one_more_step() {
        // lenA = 2*lenB: one excessive step with shift 1, then a deficient
        // step with a single quotient coefficient.
        let b = z(&[3, -1, 4, 1]);
        let a = z(&[2, 7, 1, 8, 2, 8, 1, 8]);
        let divider = CountingDivider::new();
        let mut q = zeros(5);
        let mut r = zeros(8);

        divrem_divconquer_with(&mut q, &mut r, &a, &b, &divider, &KaratsubaMultiplier::default()).unwrap();

        assert_eq!(*divider.calls.borrow(), vec![(7, 4), (1, 1)]);
        assert_eq!((q, r), reference(&a, &b));
    }

    #[test]
    fn test_long_dividend_steps() {
        // Each excessive step removes lenB coefficients.
        let b = z(&[1, 1, 1]);
        let a: Vec<Z> = (0..20).map(|i| Z::new(i - 10)).collect();
        let divider = CountingDivider::new();
        let mut q = zeros(18);
        let mut r = zeros(20);

        divrem_divconquer_with(&mut q, &mut r, &a, &b, &divider, &KaratsubaMultiplier::default()).unwrap();

        // 20 -> 17 -> 14 -> 11 -> 8 -> 5, then one balanced call.
        assert_eq!(*divider.calls.borrow(), vec![(5, 3); 6]);
        assert_eq!((q, r), reference(&a, &b));
    }

    #[test]
    fn test_many_excessive_steps_short_divisor() {
        // Hundreds of excessive steps, each carrying the reduced dividend on.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for len_b in [1usize, 2, 3] {
            let a = random_poly(&mut rng, 1500, 62);
            let mut b = random_poly(&mut rng, len_b - 1, 20);
            b.push(Z::new(-1));

            let divider = CountingDivider::new();
            let mut q: Vec<Z> = zeros(a.len() - len_b + 1);
            let mut r: Vec<Z> = zeros(a.len());
            divrem_divconquer_with(&mut q, &mut r, &a, &b, &divider, &KaratsubaMultiplier::default()).unwrap();

            assert!(divider.calls.borrow().iter().all(|&(len, _)| len <= 2 * len_b - 1));
            assert_eq!((q, r), reference(&a, &b), "lenB = {len_b}");
        }
    }

    #[test]
    fn test_inputs_untouched_and_reconstructed() {
        init_tracing();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = random_poly(&mut rng, 90, 40);
        let mut b = random_poly(&mut rng, 31, 40);
        b.push(Z::new(1));
        let (a_before, b_before) = (a.clone(), b.clone());

        let (q, r) = divide(&a, &b, &DivRemConfig { basecase_cutoff: 4, ..DivRemConfig::default() });

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert!(normalized_len(&r) < b.len());

        let mut recon = schoolbook_mul(&q, &b);
        add_in_place(&mut recon, &r);
        assert_eq!(recon, a);
    }

    #[test]
    fn test_huge_coefficients() {
        let big = |s: &str| Z(Integer::from_str_radix(s, 10).unwrap());
        let a = vec![
            big("-98765432109876543210987654321098765432109876543210"),
            big("12345678901234567890123456789012345678901234567890"),
            big("-1"),
            big("340282366920938463463374607431768211457"),
            big("-170141183460469231731687303715884105727"),
            big("99999999999999999999999999999999999999999"),
        ];
        let b = vec![big("-18446744073709551617"), big("18446744073709551615"), Z::new(-1)];

        let (q, r) = divide(&a, &b, &DivRemConfig { basecase_cutoff: 1, ..DivRemConfig::default() });
        assert_eq!((q.clone(), r.clone()), reference(&a, &b));

        let mut recon = schoolbook_mul(&q, &b);
        add_in_place(&mut recon, &r);
        assert_eq!(recon, a);
    }

    #[test]
    fn test_non_unit_exact_division() {
        // (2 + 4x)(3 - x + 5x^2) divided by (2 + 4x) over Z.
        let b = z(&[2, 4]);
        let q_expected = z(&[3, -1, 5]);
        let a = schoolbook_mul(&b, &q_expected);

        let (q, r) = divide(&a, &b, &DivRemConfig::default());
        assert_eq!(q, q_expected);
        assert_eq!(normalized_len(&r), 0);
    }

    #[test]
    fn test_non_integral_quotient_is_reported() {
        let a = z(&[1, 0, 0, 0, 1]);
        let b = z(&[1, 2]);
        let mut q = zeros(4);
        let mut r = zeros(5);

        let err = divrem_divconquer(&mut q, &mut r, &a, &b, &DivRemConfig::default()).unwrap_err();
        assert_eq!(err, DivisionError::InexactDivision);
    }

    #[test]
    fn test_randomized_against_schoolbook() {
        init_tracing();
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let config = DivRemConfig { basecase_cutoff: 3, parallel_threshold: 64 };

        for _ in 0..40 {
            let len_b = rng.gen_range(1..=120);
            let len_a = rng.gen_range(len_b..=len_b + 300);
            let a = random_poly(&mut rng, len_a, 64);
            let mut b = random_poly(&mut rng, len_b - 1, 64);
            b.push(if rng.gen_bool(0.5) { Z::new(1) } else { Z::new(-1) });

            assert_eq!(divide(&a, &b, &config), reference(&a, &b), "lenA = {len_a}, lenB = {len_b}");
        }
    }

    #[test]
    fn test_randomized_around_boundary() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let config = DivRemConfig { basecase_cutoff: 2, ..DivRemConfig::default() };

        for len_b in [1usize, 2, 3, 7, 16, 17, 33] {
            for len_a in (2 * len_b).saturating_sub(3).max(len_b)..=2 * len_b + 2 {
                let a = random_poly(&mut rng, len_a, 30);
                let mut b = random_poly(&mut rng, len_b - 1, 30);
                b.push(Z::new(-1));

                assert_eq!(divide(&a, &b, &config), reference(&a, &b), "lenA = {len_a}, lenB = {len_b}");
            }
        }
    }
}
