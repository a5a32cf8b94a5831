//! Coefficient vector primitives.
//!
//! In-place operations over coefficient slices. The division kernels
//! express every combine step through these, so each step names the
//! exact window it reads and the exact window it writes. Scratch
//! buffers are plain `Vec`s owned by the step that allocates them and
//! released when that step returns.

use zpoly_rings::traits::Ring;

/// Allocates a scratch buffer of `len` zero coefficients.
#[must_use]
pub fn zeros<R: Ring>(len: usize) -> Vec<R> {
    vec![R::zero(); len]
}

/// Copies `src` into `dst`.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn copy<R: Ring>(dst: &mut [R], src: &[R]) {
    dst.clone_from_slice(src);
}

/// `dst += src`, coefficient-wise.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn add_in_place<R: Ring>(dst: &mut [R], src: &[R]) {
    assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d = d.clone() + s.clone();
    }
}

/// `dst -= src`, coefficient-wise.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn sub_in_place<R: Ring>(dst: &mut [R], src: &[R]) {
    assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d = d.clone() - s.clone();
    }
}

/// `dst = src - dst`, coefficient-wise.
///
/// Used to turn a buffer holding a partial product into the remainder
/// it leaves in the dividend.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn rsub_in_place<R: Ring>(dst: &mut [R], src: &[R]) {
    assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.clone() - d.clone();
    }
}

/// `dst = x - y`, coefficient-wise.
///
/// # Panics
///
/// Panics if the three lengths differ.
pub fn sub_into<R: Ring>(dst: &mut [R], x: &[R], y: &[R]) {
    assert_eq!(dst.len(), x.len());
    assert_eq!(dst.len(), y.len());
    for ((d, a), b) in dst.iter_mut().zip(x).zip(y) {
        *d = a.clone() - b.clone();
    }
}

/// Length of `coeffs` once high zero coefficients are dropped.
#[must_use]
pub fn normalized_len<R: Ring>(coeffs: &[R]) -> usize {
    coeffs.iter().rposition(|c| !c.is_zero()).map_or(0, |i| i + 1)
}
