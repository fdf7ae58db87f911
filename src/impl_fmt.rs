//! Implementation of std::fmt traits
//!

use crate::*;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // zero is stored as the empty sequence but renders as "0"
        if self.digits.is_empty() {
            return f.pad_integral(true, "", "0");
        }

        let mut buf = String::with_capacity(self.digits.len());
        for &digit in self.digits.iter().rev() {
            buf.push((b'0' + digit) as char);
        }

        f.pad_integral(true, "", &buf)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt(\"{}\")", self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value: BigInt = $input.parse().unwrap();
                assert_eq!(format!("{}", value), $expected);
            }
        };
        ($name:ident: $fmt:literal, $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value: BigInt = $input.parse().unwrap();
                assert_eq!(format!($fmt, value), $expected);
            }
        };
    }

    impl_case!(case_zero: "0" => "0");
    impl_case!(case_25: "25" => "25");
    impl_case!(case_trimmed: "0001234" => "1234");
    impl_case!(case_interior_zeros: "10203" => "10203");
    impl_case!(case_19_digits: "9223372036854775807" => "9223372036854775807");

    impl_case!(case_width: "{:>10}", "1234" => "      1234");
    impl_case!(case_width_left: "{:<6}", "25" => "25    ");
    impl_case!(case_zero_fill: "{:08}", "1234" => "00001234");
    impl_case!(case_width_zero_value: "{:>4}", "0" => "   0");

    #[test]
    fn test_debug() {
        let value: BigInt = "1234".parse().unwrap();
        assert_eq!(format!("{:?}", value), "BigInt(\"1234\")");

        assert_eq!(format!("{:?}", BigInt::new()), "BigInt(\"0\")");
    }

    #[test]
    fn test_to_string() {
        let value: BigInt = "30414093201713378043612608166064768844377641568960512000000000000"
            .parse()
            .unwrap();
        assert_eq!(
            value.to_string(),
            "30414093201713378043612608166064768844377641568960512000000000000"
        );
    }
}
