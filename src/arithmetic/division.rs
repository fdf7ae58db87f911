//!
//! Digit-slice long division
//!
//! Classic long division, one dividend digit at a time from the
//! most-significant end. Each quotient digit is located by binary
//! search over the 0-9 candidate range, where every probe is a full
//! multiply-and-compare at the current magnitude.
//!

use crate::*;
use super::{cmp_digit_slices, trim_high_zeros};
use super::multiplication::multiply_digit_slices;
use super::subtraction::sub_digit_slices;

/// Quotient and remainder of two digit slices
///
/// The caller guarantees the divisor is nonzero.
pub(crate) fn div_rem_digit_slices(dividend: &[u8], divisor: &[u8]) -> (DigitVec, DigitVec) {
    debug_assert!(!divisor.is_empty());

    // quotient digits are produced most-significant first
    let mut quotient = Vec::with_capacity(dividend.len());
    let mut remainder: DigitVec = Vec::new();

    for &digit in dividend.iter().rev() {
        // remainder = remainder * 10 + digit, kept canonical
        if !(remainder.is_empty() && digit == 0) {
            remainder.insert(0, digit);
        }

        let q = quotient_digit(divisor, &remainder);
        if q != 0 {
            let product = multiply_digit_slices(divisor, &[q]);
            remainder = sub_digit_slices(&remainder, &product);
        }
        quotient.push(q);
    }

    quotient.reverse();
    trim_high_zeros(&mut quotient);
    (quotient, remainder)
}

/// Largest q in [0, 9] with `divisor * q <= remainder`
fn quotient_digit(divisor: &[u8], remainder: &[u8]) -> u8 {
    let mut q = 0;
    let mut low: u8 = 0;
    let mut high: u8 = 9;

    while low <= high {
        let mid = (low + high) / 2;
        let product = multiply_digit_slices(divisor, &[mid]);
        if cmp_digit_slices(&product, remainder) != Ordering::Greater {
            q = mid;
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    q
}

#[cfg(test)]
mod test_div_rem_digit_slices {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($n:literal),*] / [$($d:literal),*] => [$($q:literal),*] rem [$($r:literal),*]) => {
            #[test]
            fn $name() {
                let dividend: &[u8] = &[$($n),*];
                let divisor: &[u8] = &[$($d),*];
                let expected_q: &[u8] = &[$($q),*];
                let expected_r: &[u8] = &[$($r),*];

                let (quotient, remainder) = div_rem_digit_slices(dividend, divisor);
                assert_eq!(&quotient[..], expected_q);
                assert_eq!(&remainder[..], expected_r);
            }
        };
    }

    impl_case!(case_0_1: [] / [1] => [] rem []);
    impl_case!(case_5_7: [5] / [7] => [] rem [5]);
    impl_case!(case_9_3: [9] / [3] => [3] rem []);
    impl_case!(case_1234_25: [4, 3, 2, 1] / [5, 2] => [9, 4] rem [9]);
    impl_case!(case_1000_10: [0, 0, 0, 1] / [0, 1] => [0, 0, 1] rem []);
    impl_case!(case_100_99: [0, 0, 1] / [9, 9] => [1] rem [1]);
    impl_case!(case_56088_456: [8, 8, 0, 6, 5] / [6, 5, 4] => [3, 2, 1] rem []);
    impl_case!(case_10203_1: [3, 0, 2, 0, 1] / [1] => [3, 0, 2, 0, 1] rem []);

    #[test]
    fn quotient_digit_spans_whole_range() {
        let divisor: &[u8] = &[1];
        for d in 0..10u8 {
            let remainder: &[u8] = if d == 0 { &[] } else { &[d] };
            assert_eq!(quotient_digit(divisor, remainder), d);
        }
    }
}
