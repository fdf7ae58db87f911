//! Routines for parsing decimal-digit strings

use crate::*;
use crate::arithmetic::trim_high_zeros;

/// Scan a most-significant-first decimal string into digit storage
///
/// The string is treated as untrusted input: anything but an ASCII
/// decimal digit is rejected. Leading zero characters are legal but
/// are not stored.
pub(crate) fn parse_decimal_digits(s: &str) -> Result<DigitVec, ParseBigIntError> {
    if s.is_empty() {
        return Err(ParseBigIntError::Empty);
    }

    let mut digits = Vec::with_capacity(s.len());
    for ch in s.chars().rev() {
        match ch.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(ParseBigIntError::InvalidDigit(ch)),
        }
    }

    trim_high_zeros(&mut digits);
    Ok(digits)
}

#[cfg(test)]
mod test_parse_decimal_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => [$($digits:literal),*]) => {
            #[test]
            fn $name() {
                let digits = parse_decimal_digits($input).unwrap();
                let expected: &[u8] = &[$($digits),*];

                assert_eq!(&digits[..], expected);
            }
        };
        ($name:ident: $input:literal => error $err:expr) => {
            #[test]
            fn $name() {
                let result = parse_decimal_digits($input);
                assert_eq!(result.unwrap_err(), $err);
            }
        };
    }

    impl_case!(case_0: "0" => []);
    impl_case!(case_000: "000" => []);
    impl_case!(case_7: "7" => [7]);
    impl_case!(case_007: "007" => [7]);
    impl_case!(case_1234: "1234" => [4, 3, 2, 1]);
    impl_case!(case_90061: "90061" => [1, 6, 0, 0, 9]);

    impl_case!(case_empty: "" => error ParseBigIntError::Empty);
    impl_case!(case_hello: "hello" => error ParseBigIntError::InvalidDigit('o'));
    impl_case!(case_12x3: "12x3" => error ParseBigIntError::InvalidDigit('x'));
    impl_case!(case_signed: "-12" => error ParseBigIntError::InvalidDigit('-'));
    impl_case!(case_plus: "+12" => error ParseBigIntError::InvalidDigit('+'));
    impl_case!(case_decimal_point: "12.5" => error ParseBigIntError::InvalidDigit('.'));
    impl_case!(case_inner_space: "1 2" => error ParseBigIntError::InvalidDigit(' '));
    impl_case!(case_underscore: "1_000" => error ParseBigIntError::InvalidDigit('_'));
}
