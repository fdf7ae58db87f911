//! Multiplication operator trait implementation
//!

use crate::*;

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_vec(arithmetic::multiplication::multiply_digit_slices(
            self.digits(),
            rhs.digits(),
        ))
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt) {
        self.mul_assign(&rhs);
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.digits = arithmetic::multiplication::multiply_digit_slices(&self.digits, rhs.digits());
    }
}
