//! Property-based tests for exact integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, ModInt};

    const P: u64 = 998_244_353;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Decimal strings well beyond a machine word.
    fn huge_int() -> impl Strategy<Value = Integer> {
        ("-?[1-9][0-9]{20,60}").prop_map(|s| Integer::from_str_radix(&s, 10).unwrap())
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn div_rem_reconstructs(a in huge_int(), b in huge_int()) {
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.signum() == a.signum());
        }

        #[test]
        fn exact_div_inverts_mul(a in huge_int(), b in non_zero_int()) {
            let b = Integer::new(b);
            let product = &a * &b;
            prop_assert_eq!(product.exact_div(&b), Some(a));
        }

        #[test]
        fn exact_div_rejects_remainders(a in small_int(), b in 2i64..50i64, r in 1i64..50i64) {
            let b = Integer::new(b);
            let r = Integer::new(r % b.to_i64().unwrap());
            prop_assume!(!r.is_zero());
            let n = Integer::new(a) * b.clone() + r;
            prop_assert_eq!(n.exact_div(&b), None);
        }

        #[test]
        fn in_place_matches_binary(a in huge_int(), b in huge_int()) {
            let mut acc = a.clone();
            acc += &b;
            prop_assert_eq!(&acc, &(&a + &b));
            acc -= &b;
            prop_assert_eq!(acc, a);
        }

        #[test]
        fn modint_inverse(a in 1u64..1000u64) {
            let a = ModInt::<P>::new(a);
            let inv = a.inv().expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!((a * inv).value(), 1);
        }

        #[test]
        fn modint_signed_matches_negation(a in 0i64..1_000_000i64) {
            prop_assert_eq!(ModInt::<P>::from_signed(-a), -ModInt::<P>::from_signed(a));
        }

        #[test]
        fn modint_fermat_little_theorem(a in 1u64..1000u64) {
            let a = ModInt::<P>::new(a);
            prop_assert_eq!(a.pow(P - 1).value(), 1);
        }
    }
}
