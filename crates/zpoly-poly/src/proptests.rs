//! Property-based tests for polynomial arithmetic and division.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use zpoly_rings::Z;

    use crate::algorithms::basecase::{BalancedDivider, RecursiveDivider, SchoolbookDivider};
    use crate::algorithms::divconquer::DivRemConfig;
    use crate::algorithms::karatsuba::{karatsuba_mul, schoolbook_mul, KaratsubaMultiplier};
    use crate::dense::DensePoly;
    use crate::vec_ops::zeros;

    fn coeff() -> impl Strategy<Value = Z> {
        (-1_000_000i64..1_000_000i64).prop_map(Z::new)
    }

    fn small_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec(coeff(), 1..=6).prop_map(DensePoly::new)
    }

    fn long_coeffs() -> impl Strategy<Value = Vec<Z>> {
        proptest::collection::vec(coeff(), 0..=160)
    }

    // Divisors whose leading coefficient is +-1, so division over Z is exact.
    fn unit_lead_divisor() -> impl Strategy<Value = DensePoly<Z>> {
        (proptest::collection::vec(coeff(), 0..=60), prop_oneof![Just(1i64), Just(-1i64)]).prop_map(
            |(mut coeffs, lead)| {
                coeffs.push(Z::new(lead));
                DensePoly::new(coeffs)
            },
        )
    }

    fn config() -> impl Strategy<Value = DivRemConfig> {
        (1usize..=20, prop_oneof![Just(8usize), Just(usize::MAX)]).prop_map(|(basecase_cutoff, parallel_threshold)| {
            DivRemConfig {
                basecase_cutoff,
                parallel_threshold,
            }
        })
    }

    proptest! {
        // Polynomial ring axioms over Z

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_inverse(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
            prop_assert_eq!(a.add(&a.neg()), DensePoly::zero());
        }

        #[test]
        fn karatsuba_matches_schoolbook(a in long_coeffs(), b in long_coeffs()) {
            prop_assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
        }

        // Division

        #[test]
        fn div_rem_reconstructs(a in long_coeffs(), b in unit_lead_divisor(), config in config()) {
            let a = DensePoly::new(a);
            let (q, r) = a.try_div_rem_with(&b, &config).unwrap();

            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn div_rem_matches_schoolbook(a in long_coeffs(), b in unit_lead_divisor(), config in config()) {
            let a = DensePoly::new(a);
            prop_assert_eq!(a.try_div_rem_with(&b, &config), a.div_rem_schoolbook(&b));
        }

        #[test]
        fn exact_product_divides(q in small_poly(), b in small_poly(), config in config()) {
            prop_assume!(!b.is_zero() && !q.is_zero());
            let a = q.mul(&b);
            let (quotient, remainder) = a.try_div_rem_with(&b, &config).unwrap();

            prop_assert_eq!(quotient, q);
            prop_assert!(remainder.is_zero());
        }

        #[test]
        fn recursive_balanced_matches_schoolbook(
            a in proptest::collection::vec(coeff(), 63),
            b in proptest::collection::vec(coeff(), 31),
            cutoff in 1usize..8,
        ) {
            let mut b = b;
            b.push(Z::new(1));

            let mut expected = (zeros(32), zeros(63));
            SchoolbookDivider.divide_balanced(&mut expected.0, &mut expected.1, &a, &b).unwrap();

            let divider = RecursiveDivider::new(cutoff, KaratsubaMultiplier::default());
            let mut actual = (zeros(32), zeros(63));
            divider.divide_balanced(&mut actual.0, &mut actual.1, &a, &b).unwrap();

            prop_assert_eq!(actual, expected);
        }
    }
}
