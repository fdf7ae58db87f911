// Property tests to be included by lib.rs (if enabled)

mod arithmetic_props {
    use super::*;

    proptest! {
        #[test]
        fn addition_is_commutative(a: u128, b: u128) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);

            prop_assert_eq!(&x + &y, &y + &x);
        }

        #[test]
        fn addition_is_associative(a: u128, b: u128, c: u128) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            let z = BigInt::from(c);

            prop_assert_eq!((&x + &y) + &z, &x + (&y + &z));
        }

        #[test]
        fn addition_matches_native(a: u64, b: u64) {
            let sum = BigInt::from(a) + BigInt::from(b);

            prop_assert_eq!(sum, BigInt::from(a as u128 + b as u128));
        }

        #[test]
        fn subtraction_inverts_addition(a: u128, b: u128) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);

            let sum = &x + &y;
            prop_assert_eq!(&sum - &y, x);
            prop_assert_eq!(sum - BigInt::from(a), y);
        }

        #[test]
        fn multiplication_distributes_over_addition(a: u64, b: u64, c: u64) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            let z = BigInt::from(c);

            prop_assert_eq!(&x * (&y + &z), &x * &y + &x * &z);
        }

        #[test]
        fn multiplication_matches_native(a: u64, b: u64) {
            let product = BigInt::from(a) * BigInt::from(b);

            prop_assert_eq!(product, BigInt::from(a as u128 * b as u128));
        }

        #[test]
        fn division_identity(a: u128, b: u128) {
            prop_assume!(b != 0);

            let x = BigInt::from(a);
            let y = BigInt::from(b);

            let (q, r) = x.div_rem(&y).unwrap();
            prop_assert!(&r < &y);
            prop_assert_eq!(q * &y + r, x);
        }

        #[test]
        fn parse_display_round_trip(n: u128) {
            let src = n.to_string();
            let value: BigInt = src.parse().unwrap();

            prop_assert_eq!(value.to_string(), src);
        }

        #[test]
        fn to_u128_round_trip(n: u128) {
            prop_assert_eq!(BigInt::from(n).to_u128(), Some(n));
        }
    }
}
