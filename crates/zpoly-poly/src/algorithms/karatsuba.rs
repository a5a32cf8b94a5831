//! Karatsuba multiplication.
//!
//! Divide-and-conquer multiplication in O(n^1.58), used by the division
//! kernels to form partial products. Products always have the exact length
//! `a.len() + b.len() - 1`: callers add them into fixed windows, so high
//! zero coefficients are kept.

use zpoly_rings::traits::Ring;

use crate::vec_ops::{add_in_place, sub_in_place, zeros};

/// Below this length, schoolbook multiplication is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Operand length from which the three Karatsuba sub-products run in parallel.
pub const PARALLEL_MUL_THRESHOLD: usize = 256;

/// Multiplies two coefficient sequences.
pub trait Multiplier<R> {
    /// Returns `x * y` with exactly `x.len() + y.len() - 1` coefficients.
    ///
    /// Returns an empty vector if either operand is empty.
    fn mul(&self, x: &[R], y: &[R]) -> Vec<R>;
}

/// Karatsuba multiplier with rayon-parallel sub-products for large operands.
#[derive(Clone, Debug)]
pub struct KaratsubaMultiplier {
    /// Minimum operand length to split sub-products across threads.
    pub parallel_threshold: usize,
}

impl KaratsubaMultiplier {
    /// Creates a multiplier that parallelizes from `parallel_threshold` on.
    #[must_use]
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }
}

impl Default for KaratsubaMultiplier {
    fn default() -> Self {
        Self::new(PARALLEL_MUL_THRESHOLD)
    }
}

impl<R: Ring + Send + Sync> Multiplier<R> for KaratsubaMultiplier {
    fn mul(&self, x: &[R], y: &[R]) -> Vec<R> {
        mul_unbalanced(x, y, self.parallel_threshold)
    }
}

/// Sequential Karatsuba product of two coefficient slices.
#[must_use]
pub fn karatsuba_mul<R: Ring + Send + Sync>(a: &[R], b: &[R]) -> Vec<R> {
    mul_unbalanced(a, b, usize::MAX)
}

/// Multiplies operands of any length ratio.
///
/// When the longer operand is at least twice the shorter, it is cut into
/// blocks of the shorter length so that no Karatsuba call pads a short
/// operand up to the long one.
fn mul_unbalanced<R: Ring + Send + Sync>(a: &[R], b: &[R], parallel_threshold: usize) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if long.len() < 2 * short.len() {
        return karatsuba_rec(long, short, parallel_threshold);
    }

    let mut result: Vec<R> = zeros(long.len() + short.len() - 1);
    for (i, block) in long.chunks(short.len()).enumerate() {
        let offset = i * short.len();
        let prod = karatsuba_rec(block, short, parallel_threshold);
        add_in_place(&mut result[offset..offset + prod.len()], &prod);
    }
    result
}

fn karatsuba_rec<R: Ring + Send + Sync>(a: &[R], b: &[R], parallel_threshold: usize) -> Vec<R> {
    let n = a.len();
    let m = b.len();

    if n < KARATSUBA_THRESHOLD || m < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, R::zero());
    b_ext.resize(size, R::zero());

    // a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let a01: Vec<R> = a0.iter().zip(a1).map(|(x, y)| x.clone() + y.clone()).collect();
    let b01: Vec<R> = b0.iter().zip(b1).map(|(x, y)| x.clone() + y.clone()).collect();

    let (z0, (z2, mut z1)) = if n.min(m) >= parallel_threshold {
        rayon::join(
            || karatsuba_rec(a0, b0, parallel_threshold),
            || {
                rayon::join(
                    || karatsuba_rec(a1, b1, parallel_threshold),
                    || karatsuba_rec(&a01, &b01, parallel_threshold),
                )
            },
        )
    } else {
        (
            karatsuba_rec(a0, b0, parallel_threshold),
            (
                karatsuba_rec(a1, b1, parallel_threshold),
                karatsuba_rec(&a01, &b01, parallel_threshold),
            ),
        )
    };

    // z1 = (a0+a1)*(b0+b1) - z0 - z2; all three have length size - 1.
    sub_in_place(&mut z1, &z0);
    sub_in_place(&mut z1, &z2);

    let mut result: Vec<R> = zeros(2 * size - 1);
    add_in_place(&mut result[..size - 1], &z0);
    add_in_place(&mut result[half..half + size - 1], &z1);
    add_in_place(&mut result[size..], &z2);

    result.truncate(n + m - 1);
    result
}

/// Schoolbook multiplication: O(n²).
#[must_use]
pub fn schoolbook_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<R> = zeros(a.len() + b.len() - 1);
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + ai.clone() * bj.clone();
        }
    }

    result
}
