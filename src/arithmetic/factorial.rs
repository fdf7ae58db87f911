//!
//! Factorial by iterative product accumulation
//!

use crate::*;

/// Multiply an accumulator by every value from two through `n`
///
/// Built entirely from the crate's own multiplication, comparison,
/// and increment operations.
pub(crate) fn factorial(n: &BigInt) -> BigInt {
    let mut product = BigInt::one();
    let mut term = BigInt::from(2u8);

    while term <= *n {
        product = &product * &term;
        term.inc();
    }

    product
}
