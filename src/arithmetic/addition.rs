//!
//! Digit-slice addition
//!

use crate::*;

/// Sum of two digit slices, carry propagated past the longer length
#[inline]
pub(crate) fn add_digit_slices(a: &[u8], b: &[u8]) -> DigitVec {
    // a is the longer of the two
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut result = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for (i, &a_digit) in a.iter().enumerate() {
        let sum = carry + a_digit + b.get(i).copied().unwrap_or(0);
        result.push(sum % 10);
        carry = sum / 10;
    }

    // sum of two digits plus carry never carries further than one place
    if carry != 0 {
        result.push(carry);
    }

    result
}
