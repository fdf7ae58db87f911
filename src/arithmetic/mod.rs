//! arithmetic routines
//!
//! The functions in this module work on raw digit slices
//! (least-significant digit first) and return freshly allocated,
//! canonically trimmed digit vectors.

use crate::*;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod division;
pub(crate) mod factorial;
pub(crate) mod fibonacci;

/// Remove zero digits from the most-significant (stored-last) end
///
/// Restores the canonical-form invariant after an operation that may
/// leave spurious high-order zeros. Trimming zero itself yields the
/// empty vector.
pub(crate) fn trim_high_zeros(digits: &mut DigitVec) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Compare two digit slices by the magnitude they denote
///
/// Length decides first; this is sound only because both slices are
/// canonically trimmed. Equal lengths fall back to a digit-by-digit
/// scan from the most-significant end.
pub(crate) fn cmp_digit_slices(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }

    for (a_digit, b_digit) in a.iter().rev().zip(b.iter().rev()) {
        match a_digit.cmp(b_digit) {
            Ordering::Equal => continue,
            result => return result,
        }
    }

    Ordering::Equal
}


#[cfg(test)]
mod test_trim_high_zeros {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($src:literal),*] => [$($dst:literal),*]) => {
            #[test]
            fn $name() {
                let mut digits: DigitVec = vec![$($src),*];
                let expected: &[u8] = &[$($dst),*];

                trim_high_zeros(&mut digits);
                assert_eq!(&digits[..], expected);
            }
        };
    }

    impl_case!(case_empty: [] => []);
    impl_case!(case_all_zero: [0, 0, 0] => []);
    impl_case!(case_no_trim: [4, 3, 2, 1] => [4, 3, 2, 1]);
    impl_case!(case_one_high_zero: [9, 9, 9, 0] => [9, 9, 9]);
    impl_case!(case_interior_zero_kept: [0, 0, 1, 0, 0] => [0, 0, 1]);
}
