//! Implementation of num_traits
//!

use crate::*;
use num_traits::Unsigned;

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from_vec(vec![1])
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a BigInt from a string literal
    ///
    /// Only radix 10 is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if radix != 10 {
            return Err(ParseBigIntError::Other(String::from(
                "The radix for BigInt MUST be 10",
            )));
        }
        s.parse()
    }
}

impl Unsigned for BigInt {}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            return None;
        }
        Some(BigInt::from(n as u64))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        if n < 0 {
            return None;
        }
        Some(BigInt::from(n as u128))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        match self.to_u64() {
            Some(n) if n <= i64::max_value() as u64 => Some(n as i64),
            _ => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        let mut value: u64 = 0;
        for &digit in self.digits.iter().rev() {
            value = value.checked_mul(10)?.checked_add(digit as u64)?;
        }
        Some(value)
    }

    fn to_i128(&self) -> Option<i128> {
        match self.to_u128() {
            Some(n) if n <= i128::max_value() as u128 => Some(n as i128),
            _ => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        let mut value: u128 = 0;
        for &digit in self.digits.iter().rev() {
            value = value.checked_mul(10)?.checked_add(digit as u128)?;
        }
        Some(value)
    }
}

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &BigInt) -> Option<BigInt> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    /// None if the minuend is smaller than the subtrahend
    #[inline]
    fn checked_sub(&self, v: &BigInt) -> Option<BigInt> {
        if self < v {
            return None;
        }
        Some(BigInt::from_vec(arithmetic::subtraction::sub_digit_slices(
            self.digits(),
            v.digits(),
        )))
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &BigInt) -> Option<BigInt> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    /// None if the divisor is zero
    #[inline]
    fn checked_div(&self, v: &BigInt) -> Option<BigInt> {
        self.div_rem(v).ok().map(|(quotient, _)| quotient)
    }
}

impl CheckedRem for BigInt {
    /// None if the divisor is zero
    #[inline]
    fn checked_rem(&self, v: &BigInt) -> Option<BigInt> {
        self.div_rem(v).ok().map(|(_, remainder)| remainder)
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, n| acc + n)
    }
}
