//! Division operator trait implementation
//!
//! The `/` operator panics on a zero divisor; `checked_div` and
//! `div_rem` are the non-panicking forms.
//!

use crate::*;

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("Division by zero"),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);
