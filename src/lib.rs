//! A Big (unsigned) Integer
//!
//! `BigInt` stores a non-negative integer of unbounded magnitude as a
//! sequence of decimal digits, least-significant digit first. The four
//! basic arithmetic operators, comparison, and increment are overloaded,
//! so values can be treated much like ordinary numbers.
//!
//! The stored digit sequence is always canonical: every digit is in the
//! range 0-9, and the most-significant stored digit is never zero. The
//! empty sequence represents zero. Binary operators never mutate their
//! operands; each produces a new value.
//!
//! # Example
//!
//! ```
//! use bigint::BigInt;
//! use std::str::FromStr;
//!
//! let a = BigInt::from(1234u32);
//! let b = BigInt::from_str("9223372036854775807").unwrap();
//!
//! println!("{} * {} = {}", &a, &b, &a * &b);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

extern crate num_traits;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::fmt;
use self::stdlib::iter::Sum;
use self::stdlib::ops::{Add, AddAssign, Div, Mul, MulAssign, Rem, Sub, SubAssign};
use self::stdlib::str::FromStr;
use self::stdlib::string::{String, ToString};
use self::stdlib::vec::Vec;

pub use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, FromPrimitive, Num, One,
    ToPrimitive, Zero,
};

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

#[cfg(all(test, feature = "serde"))]
extern crate serde_json;

// From<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialOrd / Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Display & Debug
mod impl_fmt;

mod parsing;
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

mod arithmetic;

/// Digit storage, least-significant digit first
pub(crate) type DigitVec = Vec<u8>;

/// An arbitrary-precision non-negative integer.
///
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    // each element in [0, 9]; the last (most-significant) is never zero
    digits: DigitVec,
}

impl BigInt {
    /// Creates and initializes a `BigInt` equal to zero.
    ///
    #[inline]
    pub fn new() -> BigInt {
        BigInt { digits: Vec::new() }
    }

    /// Wrap an already-canonical digit vector
    #[inline]
    pub(crate) fn from_vec(digits: DigitVec) -> BigInt {
        debug_assert!(digits.iter().all(|&d| d < 10));
        debug_assert!(digits.last().map_or(true, |&d| d != 0));
        BigInt { digits: digits }
    }

    /// View of the stored digits, least-significant first
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of stored decimal digits
    ///
    /// Zero has a digit count of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(1000u32).digit_count(), 4);
    /// assert_eq!(BigInt::new().digit_count(), 0);
    /// ```
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Quotient and remainder of `self / divisor` in one pass
    ///
    /// A zero divisor is reported as `ArithmeticError::DivisionByZero`
    /// rather than attempting the division.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let n = BigInt::from(1234u32);
    /// let d = BigInt::from(25u32);
    ///
    /// let (q, r) = n.div_rem(&d).unwrap();
    /// assert_eq!(q, BigInt::from(49u32));
    /// assert_eq!(r, BigInt::from(9u32));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (quotient, remainder) =
            arithmetic::division::div_rem_digit_slices(self.digits(), divisor.digits());
        Ok((BigInt::from_vec(quotient), BigInt::from_vec(remainder)))
    }

    /// Add one to self, returning the updated value (pre-increment)
    pub fn inc(&mut self) -> BigInt {
        self.digits = arithmetic::addition::add_digit_slices(&self.digits, &[1]);
        self.clone()
    }

    /// Add one to self, returning the value held before the update
    /// (post-increment)
    pub fn fetch_inc(&mut self) -> BigInt {
        let previous = self.clone();
        self.digits = arithmetic::addition::add_digit_slices(&self.digits, &[1]);
        previous
    }

    /// Product of every integer from two through self
    ///
    /// `factorial(0)` and `factorial(1)` are both one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(5u32).factorial(), BigInt::from(120u32));
    /// ```
    pub fn factorial(&self) -> BigInt {
        arithmetic::factorial::factorial(self)
    }

    /// The self-th term of the Fibonacci sequence
    ///
    /// `fibonacci(0)` is zero, `fibonacci(1)` is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(10u32).fibonacci(), BigInt::from(55u32));
    /// ```
    pub fn fibonacci(&self) -> BigInt {
        arithmetic::fibonacci::fibonacci(self)
    }
}

/// The error type returned when parsing a decimal string fails
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseBigIntError {
    Empty,
    InvalidDigit(char),
    Other(String),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            Empty => "Failed to parse empty string".fmt(f),
            InvalidDigit(c) => write!(f, "Invalid digit found in string: {:?}", c),
            Other(ref reason) => reason[..].fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigIntError {
    fn description(&self) -> &str {
        "failed to parse bigint"
    }
}

/// The error type returned by fallible arithmetic operations
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArithmeticError {
    /// The divisor of a division or modulo operation was zero
    DivisionByZero,
    /// The minuend of a subtraction was smaller than the subtrahend
    Underflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            DivisionByZero => "Division by zero".fmt(f),
            Underflow => "Subtraction underflow".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {
    fn description(&self) -> &str {
        "arithmetic operation failed"
    }
}


#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use proptest::*;

    include!("lib.tests.property-tests.rs");
}
