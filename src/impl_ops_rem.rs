//! Remainder operator trait implementation
//!
//! The `%` operator panics on a zero divisor; `checked_rem` and
//! `div_rem` are the non-panicking forms.
//!

use crate::*;

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("Modulo by zero"),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);
