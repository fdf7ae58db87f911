//! Addition operator trait implementation
//!

use crate::*;

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::from_vec(arithmetic::addition::add_digit_slices(
            self.digits(),
            rhs.digits(),
        ))
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        self.add_assign(&rhs);
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.digits = arithmetic::addition::add_digit_slices(&self.digits, rhs.digits());
    }
}
