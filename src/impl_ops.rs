//! Addition between native unsigned integers and BigInt
//!
//! Lets a primitive participate in addition symmetrically: the
//! primitive is promoted with `From` and the work is delegated to the
//! BigInt addition operator.
//!

use crate::*;

macro_rules! impl_add_for_primitive {
    ($t:ty) => {
        impl Add<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: $t) -> BigInt {
                &self + &BigInt::from(rhs)
            }
        }

        impl<'a> Add<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: $t) -> BigInt {
                self + &BigInt::from(rhs)
            }
        }

        impl Add<BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: BigInt) -> BigInt {
                // addition is commutative
                rhs + self
            }
        }

        impl<'a> Add<&'a BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: &BigInt) -> BigInt {
                rhs + self
            }
        }

        impl AddAssign<$t> for BigInt {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                self.add_assign(&BigInt::from(rhs));
            }
        }
    };
}

impl_add_for_primitive!(u8);
impl_add_for_primitive!(u16);
impl_add_for_primitive!(u32);
impl_add_for_primitive!(u64);
impl_add_for_primitive!(u128);
impl_add_for_primitive!(usize);
