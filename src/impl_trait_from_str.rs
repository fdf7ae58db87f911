use crate::*;

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        parsing::parse_decimal_digits(s).map(BigInt::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $n:literal) => {
            #[test]
            fn $name() {
                let value = BigInt::from_str($input).unwrap();
                assert_eq!(value, BigInt::from($n as u128));
            }
        };
    }

    impl_case!(case_0: "0" => 0);
    impl_case!(case_25: "25" => 25);
    impl_case!(case_1234: "1234" => 1234);
    impl_case!(case_0001234: "0001234" => 1234);
    impl_case!(case_9223372036854775807: "9223372036854775807" => 9223372036854775807u64);
    impl_case!(case_10000000000000000000000: "10000000000000000000000" => 10000000000000000000000u128);

    #[test]
    fn case_round_trip_no_leading_zeros() {
        let src = "31415926535897932384626433832795028841971693993751";
        let value: BigInt = src.parse().unwrap();
        assert_eq!(value.to_string(), src);
    }
}
