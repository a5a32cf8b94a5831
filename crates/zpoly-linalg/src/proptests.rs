//! Property-based tests for the triangular solvers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use zpoly_rings::FiniteField;

    use crate::dense_matrix::DenseMatrix;
    use crate::triangular::{solve_triu_classical, solve_triu_with, TriangularSolveConfig};

    type F = FiniteField<10_007>;

    fn element() -> impl Strategy<Value = F> {
        (0u64..10_007).prop_map(F::new)
    }

    fn non_zero() -> impl Strategy<Value = F> {
        (1u64..10_007).prop_map(F::new)
    }

    // (U, B) with U upper triangular and invertible.
    fn system() -> impl Strategy<Value = (DenseMatrix<F>, DenseMatrix<F>)> {
        (1usize..12, 1usize..6).prop_flat_map(|(n, m)| {
            (
                proptest::collection::vec(non_zero(), n),
                proptest::collection::vec(element(), n * n),
                proptest::collection::vec(element(), n * m),
            )
                .prop_map(move |(diag, upper, rhs)| {
                    let mut u = DenseMatrix::zeros(n, n);
                    for i in 0..n {
                        u[(i, i)] = diag[i];
                        for j in i + 1..n {
                            u[(i, j)] = upper[i * n + j];
                        }
                    }
                    let b = DenseMatrix::from_rows(rhs.chunks(m).map(<[F]>::to_vec).collect());
                    (u, b)
                })
        })
    }

    proptest! {
        #[test]
        fn classical_solves_system((u, b) in system(), unit in any::<bool>()) {
            let x = solve_triu_classical(&u, &b, unit).unwrap();

            let mut effective = u.clone();
            if unit {
                for i in 0..u.num_rows() {
                    effective[(i, i)] = F::new(1);
                }
            }
            prop_assert_eq!(effective.mm(&x), b);
        }

        #[test]
        fn recursive_agrees_with_classical(
            (u, b) in system(),
            unit in any::<bool>(),
            rows_cutoff in 1usize..6,
            cols_cutoff in 1usize..4,
        ) {
            let config = TriangularSolveConfig { rows_cutoff, cols_cutoff };
            let expected = solve_triu_classical(&u, &b, unit).unwrap();
            prop_assert_eq!(solve_triu_with(&u, &b, unit, &config).unwrap(), expected);
        }
    }
}
