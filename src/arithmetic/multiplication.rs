//!
//! Digit-slice schoolbook multiplication
//!
//! The naive O(n*m) algorithm, on purpose. Every digit pair is
//! accumulated into a scratch buffer at the position sum of its
//! indices, with carries rippled forward as they appear.
//!

use crate::*;
use super::trim_high_zeros;

/// Product of two digit slices
pub(crate) fn multiply_digit_slices(a: &[u8], b: &[u8]) -> DigitVec {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    // the product of an n-digit and an m-digit number has at most
    // n + m digits, so carries never ripple past the buffer
    let mut result = vec![0; a.len() + b.len()];

    for (i, &a_digit) in a.iter().enumerate() {
        if a_digit == 0 {
            continue;
        }

        let mut carry = 0u16;
        let mut j = 0;
        while j < b.len() || carry != 0 {
            let b_digit = b.get(j).copied().unwrap_or(0);
            let sum = result[i + j] as u16 + carry + a_digit as u16 * b_digit as u16;
            result[i + j] = (sum % 10) as u8;
            carry = sum / 10;
            j += 1;
        }
    }

    trim_high_zeros(&mut result);
    result
}
