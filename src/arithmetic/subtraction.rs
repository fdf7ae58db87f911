//!
//! Digit-slice subtraction
//!

use crate::*;
use super::{cmp_digit_slices, trim_high_zeros};

/// Difference of two digit slices with borrow propagation
///
/// The caller guarantees `a >= b`; the borrow loop runs over the
/// minuend's length and the result is trimmed back to canonical form.
pub(crate) fn sub_digit_slices(a: &[u8], b: &[u8]) -> DigitVec {
    debug_assert!(cmp_digit_slices(a, b) != Ordering::Less);

    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &a_digit) in a.iter().enumerate() {
        let b_digit = b.get(i).copied().unwrap_or(0);
        let mut diff = a_digit as i8 - borrow - b_digit as i8;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }

    trim_high_zeros(&mut result);
    result
}
