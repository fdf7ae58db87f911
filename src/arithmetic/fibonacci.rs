//!
//! The n-th Fibonacci term
//!
//! An explicit iterative loop carrying the two most recent terms. The
//! counter is itself a `BigInt` and is decremented down to zero, so
//! the input magnitude is not bounded by any native integer width and
//! never translates into call-stack depth.
//!

use crate::*;

/// Term `n` of the Fibonacci sequence
pub(crate) fn fibonacci(n: &BigInt) -> BigInt {
    let one = BigInt::one();
    let mut remaining = n.clone();
    let mut previous = BigInt::zero();
    let mut current = BigInt::one();

    while !remaining.is_zero() {
        let next = &previous + &current;
        previous = current;
        current = next;
        remaining = &remaining - &one;
    }

    previous
}
