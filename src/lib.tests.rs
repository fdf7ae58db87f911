// Tests to be included by lib.rs

use crate::stdlib::hash::{Hash, Hasher};
use crate::stdlib::DefaultHasher;

fn hash<T: Hash>(obj: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    obj.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_construction_equivalence() {
    let n1 = BigInt::from(25u32);
    let s1: BigInt = "25".parse().unwrap();
    let n2 = BigInt::from(1234u32);
    let s2: BigInt = "1234".parse().unwrap();
    let n3 = n2.clone();

    assert_eq!(n1, s1);
    assert_eq!(n2, s2);
    assert_eq!(n3, n2);
    assert_eq!(BigInt::new(), "0".parse().unwrap());
}

#[test]
fn test_digit_count() {
    assert_eq!(BigInt::new().digit_count(), 0);
    assert_eq!(BigInt::from(7u8).digit_count(), 1);
    assert_eq!(BigInt::from(1000u32).digit_count(), 4);
    assert_eq!(BigInt::from(9223372036854775807u64).digit_count(), 19);

    let big: BigInt = "9223372036854775807".parse().unwrap();
    assert_eq!(big.digit_count(), 19);
}

#[test]
fn test_worked_arithmetic_examples() {
    let n: BigInt = "1234".parse().unwrap();
    assert_eq!((n + 1u8).to_string(), "1235");

    let n: BigInt = "1000".parse().unwrap();
    let one = BigInt::one();
    assert_eq!((n - one).to_string(), "999");

    let a: BigInt = "123".parse().unwrap();
    let b: BigInt = "456".parse().unwrap();
    assert_eq!((a * b).to_string(), "56088");

    let n: BigInt = "1234".parse().unwrap();
    let d: BigInt = "25".parse().unwrap();
    assert_eq!((&n / &d).to_string(), "49");
    assert_eq!((&n % &d).to_string(), "9");

    assert_eq!(BigInt::from(5u8).factorial().to_string(), "120");
    assert_eq!(BigInt::from(10u8).fibonacci().to_string(), "55");
}

#[test]
fn test_pre_increment() {
    let mut s1: BigInt = "25".parse().unwrap();

    let returned = s1.inc();
    assert_eq!(returned, BigInt::from(26u8));
    assert_eq!(s1, BigInt::from(26u8));
}

#[test]
fn test_post_increment() {
    let mut n1: BigInt = "25".parse().unwrap();

    let returned = n1.fetch_inc();
    assert_eq!(returned, BigInt::from(25u8));
    assert_eq!(n1, BigInt::from(26u8));
}

#[test]
fn test_increment_carries() {
    let mut n: BigInt = "999".parse().unwrap();
    assert_eq!(n.inc(), BigInt::from(1000u32));

    let mut zero = BigInt::new();
    assert_eq!(zero.fetch_inc(), BigInt::new());
    assert_eq!(zero, BigInt::one());
}

#[test]
fn test_primitive_plus_bigint() {
    let n1 = BigInt::from(25u32);

    assert_eq!((10u32 + &n1).to_string(), "35");
    assert_eq!((&n1 + 10u32).to_string(), "35");
}

#[test]
fn test_display_zero_is_single_character() {
    assert_eq!(BigInt::new().to_string(), "0");
    assert_eq!(BigInt::default().to_string(), "0");
}

#[test]
fn test_string_round_trip() {
    let cases = [
        "1",
        "10",
        "25",
        "999",
        "56088",
        "9223372036854775807",
        "340282366920938463463374607431768211455",
        "853973422267356706546355086954657449503488853576522613781598095497555809392678719106806907114687",
    ];

    for src in cases.iter() {
        let value: BigInt = src.parse().unwrap();
        assert_eq!(&value.to_string(), src);
    }
}

#[test]
fn test_div_rem_identity() {
    let pairs = [
        ("1234", "25"),
        ("1", "9999"),
        ("98765432109876543210", "12345"),
        ("31415926535897932384626433832795028841971693993751", "271828182845904523"),
        ("1000000000000000000000000", "7"),
    ];

    for &(a_src, b_src) in pairs.iter() {
        let a: BigInt = a_src.parse().unwrap();
        let b: BigInt = b_src.parse().unwrap();

        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r < b, "{} % {} not below divisor", a_src, b_src);
        assert_eq!(q * &b + r, a);
    }
}

#[test]
fn test_large_magnitude_stress() {
    let fact = BigInt::from(50u8).factorial();
    assert_eq!(
        fact.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
    assert_eq!(fact.digit_count(), 65);

    let fib = BigInt::from(250u8).fibonacci();
    assert_eq!(
        fib.to_string(),
        "7896325826131730509282738943634332893686268675876375"
    );
}

#[test]
fn test_equal_values_hash_equal() {
    let a: BigInt = "0001234".parse().unwrap();
    let b = BigInt::from(1234u32);

    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));

    let zero_parsed: BigInt = "000".parse().unwrap();
    assert_eq!(hash(&zero_parsed), hash(&BigInt::new()));
}

#[test]
fn test_operators_take_owned_copies() {
    let a: BigInt = "9223372036854775807".parse().unwrap();
    let b: BigInt = "1234".parse().unwrap();

    let product = &a * &b;
    let sum = &a + &b;
    let quotient = &a / &b;
    let remainder = &a % &b;
    let difference = &a - &b;

    // operands unchanged by any of the above
    assert_eq!(a.to_string(), "9223372036854775807");
    assert_eq!(b.to_string(), "1234");

    assert_eq!(product.to_string(), "11381641093478793345838");
    assert_eq!(quotient * b + remainder, a);
    assert_eq!(sum - difference, BigInt::from(2468u32));
}
