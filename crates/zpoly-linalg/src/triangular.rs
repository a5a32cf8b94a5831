//! Upper-triangular solvers.
//!
//! Solves `U * X = B` for `X`, where `U` is square and upper triangular
//! over a field and `B` has as many rows as `U`. Two strategies exist:
//! classical back substitution, and a recursive block split whose cost is
//! dominated by one matrix product per level. [`solve_triu`] picks between
//! them by the shape of `B`.

use thiserror::Error;
use tracing::debug;

use zpoly_rings::traits::Field;

use crate::dense_matrix::DenseMatrix;

/// Right-hand sides with fewer rows than this are solved classically.
pub const SOLVE_TRI_ROWS_CUTOFF: usize = 64;

/// Right-hand sides with fewer columns than this are solved classically.
pub const SOLVE_TRI_COLS_CUTOFF: usize = 64;

/// Errors reported by the triangular solvers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The coefficient matrix is not square.
    #[error("triangular matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Rows of the coefficient matrix.
        rows: usize,
        /// Columns of the coefficient matrix.
        cols: usize,
    },

    /// The right-hand side does not have one row per unknown.
    #[error("right-hand side has {rhs_rows} rows, expected {expected}")]
    DimensionMismatch {
        /// Rows required by the coefficient matrix.
        expected: usize,
        /// Rows of the right-hand side.
        rhs_rows: usize,
    },

    /// A diagonal entry is zero and the solve is not unit-diagonal.
    #[error("zero diagonal entry at index {index}")]
    SingularDiagonal {
        /// Position of the first zero on the diagonal.
        index: usize,
    },
}

/// Which solver [`solve_triu_with`] dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStrategy {
    /// Back substitution.
    Classical,
    /// Recursive block splitting.
    Recursive,
}

/// Cutoffs for choosing a triangular solve strategy.
#[derive(Clone, Debug)]
pub struct TriangularSolveConfig {
    /// Minimum number of rows of `B` for the recursive solver.
    pub rows_cutoff: usize,
    /// Minimum number of columns of `B` for the recursive solver.
    pub cols_cutoff: usize,
}

impl Default for TriangularSolveConfig {
    fn default() -> Self {
        Self {
            rows_cutoff: SOLVE_TRI_ROWS_CUTOFF,
            cols_cutoff: SOLVE_TRI_COLS_CUTOFF,
        }
    }
}

impl TriangularSolveConfig {
    /// Strategy for a right-hand side of shape `rows x cols`.
    ///
    /// Recursive only when both dimensions reach their cutoffs.
    #[must_use]
    pub fn strategy(&self, rows: usize, cols: usize) -> SolveStrategy {
        if rows < self.rows_cutoff || cols < self.cols_cutoff {
            SolveStrategy::Classical
        } else {
            SolveStrategy::Recursive
        }
    }
}

/// Solves `U * X = B` with the default cutoffs.
///
/// With `unit` set the diagonal of `U` is taken to be all ones and is
/// never read.
///
/// # Errors
///
/// See [`SolveError`].
pub fn solve_triu<R>(u: &DenseMatrix<R>, b: &DenseMatrix<R>, unit: bool) -> Result<DenseMatrix<R>, SolveError>
where
    R: Field + Send + Sync,
{
    solve_triu_with(u, b, unit, &TriangularSolveConfig::default())
}

/// Solves `U * X = B`, choosing the strategy from the shape of `B`.
///
/// # Errors
///
/// See [`SolveError`].
pub fn solve_triu_with<R>(
    u: &DenseMatrix<R>,
    b: &DenseMatrix<R>,
    unit: bool,
    config: &TriangularSolveConfig,
) -> Result<DenseMatrix<R>, SolveError>
where
    R: Field + Send + Sync,
{
    let strategy = config.strategy(b.num_rows(), b.num_cols());
    debug!(rows = b.num_rows(), cols = b.num_cols(), ?strategy, "upper-triangular solve");

    match strategy {
        SolveStrategy::Classical => solve_triu_classical(u, b, unit),
        SolveStrategy::Recursive => solve_triu_recursive(u, b, unit, config),
    }
}

/// Solves `U * X = B` by back substitution, one column of `B` at a time.
///
/// # Errors
///
/// See [`SolveError`].
pub fn solve_triu_classical<R: Field>(
    u: &DenseMatrix<R>,
    b: &DenseMatrix<R>,
    unit: bool,
) -> Result<DenseMatrix<R>, SolveError> {
    check_shapes(u, b)?;
    let n = u.num_rows();
    let m = b.num_cols();

    let inverses = if unit {
        Vec::new()
    } else {
        (0..n)
            .map(|i| u[(i, i)].inv().ok_or(SolveError::SingularDiagonal { index: i }))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut x = DenseMatrix::zeros(n, m);
    let mut col = Vec::with_capacity(n);
    for j in 0..m {
        col.clear();
        col.resize(n, R::zero());

        for i in (0..n).rev() {
            let mut s = b[(i, j)].clone();
            for (k, xk) in col.iter().enumerate().skip(i + 1) {
                s = s - u[(i, k)].clone() * xk.clone();
            }
            col[i] = if unit { s } else { s * inverses[i].clone() };
        }

        for (i, xi) in col.iter().enumerate() {
            x[(i, j)] = xi.clone();
        }
    }

    Ok(x)
}

/// Solves `U * X = B` by splitting `U` into blocks.
///
/// With `U = [[A, C], [0, D]]` split at `r = n / 2` and `B = [B0; B1]`,
/// solves `D * X1 = B1`, then `A * X0 = B0 - C * X1`. Both sub-solves go
/// back through [`solve_triu_with`]; the update product runs on the rayon
/// pool.
///
/// # Errors
///
/// See [`SolveError`].
pub fn solve_triu_recursive<R>(
    u: &DenseMatrix<R>,
    b: &DenseMatrix<R>,
    unit: bool,
    config: &TriangularSolveConfig,
) -> Result<DenseMatrix<R>, SolveError>
where
    R: Field + Send + Sync,
{
    check_shapes(u, b)?;
    let n = u.num_rows();
    if n < 2 {
        return solve_triu_classical(u, b, unit);
    }
    if !unit {
        // Report the first zero against the full matrix, not a block.
        if let Some(index) = (0..n).find(|&i| u[(i, i)].is_zero()) {
            return Err(SolveError::SingularDiagonal { index });
        }
    }

    let m = b.num_cols();
    let r = n / 2;

    let a = u.submatrix(0, 0, r, r);
    let c = u.submatrix(0, r, r, n - r);
    let d = u.submatrix(r, r, n - r, n - r);
    let b0 = b.submatrix(0, 0, r, m);
    let b1 = b.submatrix(r, 0, n - r, m);

    let x1 = solve_triu_with(&d, &b1, unit, config)?;
    let b0 = &b0 - &c.mm_parallel(&x1);
    let x0 = solve_triu_with(&a, &b0, unit, config)?;

    Ok(DenseMatrix::vstack(x0, x1))
}

fn check_shapes<R>(u: &DenseMatrix<R>, b: &DenseMatrix<R>) -> Result<(), SolveError> {
    if !u.is_square() {
        return Err(SolveError::NotSquare {
            rows: u.num_rows(),
            cols: u.num_cols(),
        });
    }
    if b.num_rows() != u.num_rows() {
        return Err(SolveError::DimensionMismatch {
            expected: u.num_rows(),
            rhs_rows: b.num_rows(),
        });
    }
    Ok(())
}
