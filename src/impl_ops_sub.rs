//! Subtraction operator trait implementation
//!
//! The value model is unsigned, so `a - b` has an explicit
//! precondition `a >= b`. The operators panic when it is violated;
//! `checked_sub` is the non-panicking form.
//!

use crate::*;

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        match self.checked_sub(rhs) {
            Some(difference) => difference,
            None => panic!("Subtraction underflow"),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        self.sub_assign(&rhs);
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal - $b:literal => $c:literal) => {
            #[test]
            fn $name() {
                let a: BigInt = $a.parse().unwrap();
                let b: BigInt = $b.parse().unwrap();
                let c: BigInt = $c.parse().unwrap();

                assert_eq!(c, a.clone() - b.clone());
                assert_eq!(c, a.clone() - &b);
                assert_eq!(c, &a - b.clone());
                assert_eq!(c, &a - &b);

                let mut n = a.clone();
                n -= b.clone();
                assert_eq!(c, n);

                let mut n = a.clone();
                n -= &b;
                assert_eq!(c, n);
            }
        };
    }

    impl_case!(case_0_0: "0" - "0" => "0");
    impl_case!(case_25_25: "25" - "25" => "0");
    impl_case!(case_1000_1: "1000" - "1" => "999");
    impl_case!(case_1235_1234: "1235" - "1234" => "1");
    impl_case!(case_borrow_chain: "100000000000000000000" - "1" => "99999999999999999999");
    impl_case!(case_50_digits:
        "31415926535897932384626433832795028841971693993751"
        - "27182818284590452353602874713526624977572470937"
        => "31388743717613341932272830958081502216994121522814");

    #[test]
    #[should_panic(expected = "Subtraction underflow")]
    fn test_underflow_panics() {
        let a: BigInt = "24".parse().unwrap();
        let b: BigInt = "25".parse().unwrap();
        let _ = a - b;
    }

    #[test]
    fn test_add_then_sub_round_trip() {
        let a: BigInt = "98765432109876543210".parse().unwrap();
        let b: BigInt = "12345".parse().unwrap();

        assert_eq!((&a + &b) - &b, a);
        assert_eq!((&a - &b) + &b, a);
    }
}
