extern crate bigint;
use bigint::BigInt;
use std::str::FromStr;

fn main() {
    println!("Hello, BigInts!");

    let n1 = BigInt::from(25u32);
    let s1 = BigInt::from_str("25").unwrap();
    let n2 = BigInt::from(1234u32);
    let big = BigInt::from_str("9223372036854775807").unwrap();

    println!("n1(int)  : {:>25}", n1);
    println!("s1(str)  : {:>25}", s1);
    println!("n2(int)  : {:>25}", n2);
    println!("big      : {:>25}", big);
    println!("(n1 == s1)? --> {}", n1 == s1);

    println!("{} / {} = {} rem {}", &n2, &n1, &n2 / &n1, &n2 % &n1);

    println!("10 + n1 = {}", 10u32 + &n1);
    println!("n1 + 10 = {}", &n1 + 10u32);

    let mut counter = n1.clone();
    println!("counter++ --> before: {} after: {}", counter.fetch_inc(), counter);
    let mut counter = s1.clone();
    println!("++counter --> before: {} after: {}", counter.inc(), counter);

    let product = &n2 * &big;
    println!("n2 * big = {}", product);
    println!("     ... a {}-digit number", product.digit_count());

    let fact = BigInt::from(50u32).factorial();
    println!("factorial(50) = {}", fact);

    let fib = BigInt::from(250u32).fibonacci();
    println!("fibonacci(250) = {}", fib);

    match n2.div_rem(&BigInt::new()) {
        Ok(_) => println!("unexpected quotient"),
        Err(err) => println!("dividing by zero fails: {}", err),
    }
}
