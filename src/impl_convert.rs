//! Code for implementing From<primitive> for BigInt

use crate::*;

/// Extract the decimal digits of a native integer, least-significant
/// first; zero yields the empty vector
fn digits_from_u128(mut n: u128) -> DigitVec {
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits
}

macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                BigInt::from_vec(digits_from_u128(n as u128))
            }
        }

        impl<'a> From<&'a $t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);
