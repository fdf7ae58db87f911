//! Implementation of comparison operations
//!
//! Equality and hashing are structural (derived), which is correct
//! because the digit vector is always canonically trimmed: no two
//! distinct vectors denote the same value.
//!

use crate::*;

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Complete ordering for BigInt
    ///
    /// # Example
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// let a = bigint::BigInt::from_str("999").unwrap();
    /// let b = bigint::BigInt::from_str("1000").unwrap();
    /// assert!(a < b);
    /// assert!(b > a);
    /// let c = bigint::BigInt::from_str("1000").unwrap();
    /// assert!(b >= c);
    /// assert!(c >= b);
    /// ```
    #[inline]
    fn cmp(&self, other: &BigInt) -> Ordering {
        arithmetic::cmp_digit_slices(self.digits(), other.digits())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    mod ord {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal < $b:literal) => {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();

                    assert!(&a < &b);
                    assert!(&b > &a);
                    assert!(&a <= &b);
                    assert_ne!(a, b);
                }
            };
        }

        impl_test!(case_0_1: "0" < "1");
        impl_test!(case_1_2: "1" < "2");
        impl_test!(case_9_10: "9" < "10");
        impl_test!(case_999_1000: "999" < "1000");
        impl_test!(case_1234_1324: "1234" < "1324");
        impl_test!(case_shorter_always_less: "999999999" < "1000000000");
        impl_test!(case_first_digit_decides: "899999999999999999999" < "900000000000000000000");
        impl_test!(case_large: "340282366920938463463374607431768211455" < "340282366920938463463374607431768211456");
    }

    mod eq {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal = $b:literal) => {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();

                    assert_eq!(&a, &b);
                    assert_eq!(a, b);
                }
            };
        }

        impl_test!(case_zero: "0" = "000");
        impl_test!(case_1: "1" = "01");
        impl_test!(case_25: "25" = "25");
        impl_test!(case_leading_zeros: "0001234" = "1234");
    }

    #[test]
    fn test_reflexive_le() {
        let a: BigInt = "12345678901234567890".parse().unwrap();
        assert!(a <= a.clone());
        assert!(a >= a.clone());
    }

    #[test]
    fn test_ordering_is_total() {
        let values: Vec<BigInt> = ["0", "1", "9", "10", "99", "100", "12345678901234567890"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
            }
        }
    }
}
