//! Arithmetic, promotion, and rounding behavior across both representations.

use pretty_assertions::assert_eq;
use rationum::{Number, NumberError, RoundingMode};

fn num(s: &str) -> Number {
    s.parse().unwrap()
}

#[test]
fn addition_and_multiplication_commute() {
    let values = [
        num("0.1"),
        num("-2.50"),
        num("1000"),
        Number::fraction(1, 3).unwrap(),
        Number::fraction(-7, 6).unwrap(),
        Number::fraction_raw(2, 6).unwrap(),
    ];
    for a in &values {
        for b in &values {
            assert_eq!(a + b, b + a, "{a} + {b}");
            assert_eq!(a * b, b * a, "{a} * {b}");
        }
    }
}

#[test]
fn addition_associates() {
    let a = num("0.1");
    let b = Number::fraction(1, 3).unwrap();
    let c = num("-2.5");
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
}

#[test]
fn promotion_correctness() {
    let third = Number::fraction(1, 3).unwrap();
    assert_eq!(third.to_string(), "1/3");

    let half = Number::fraction(10, 20).unwrap();
    assert_eq!(half.to_string(), "0.5");
}

#[test]
fn division_exactness() {
    assert_eq!(num("10").try_div(&num("4")).unwrap(), num("2.5"));
    assert_eq!(
        num("1").try_div(&num("3")).unwrap(),
        Number::fraction(1, 3).unwrap()
    );
    assert_eq!(num("1").try_div(&num("0")), Err(NumberError::DivisionByZero));
}

#[test]
fn division_operator_panics_on_zero() {
    let result = std::panic::catch_unwind(|| num("1") / num("0"));
    assert!(result.is_err());
}

#[test]
fn rounding_table() {
    let cases = [
        ("2.3", RoundingMode::Up, "3"),
        ("-2.3", RoundingMode::Up, "-3"),
        ("2.3", RoundingMode::Down, "2"),
        ("-2.3", RoundingMode::Down, "-2"),
        ("2.3", RoundingMode::Ceiling, "3"),
        ("-2.3", RoundingMode::Ceiling, "-2"),
        ("2.3", RoundingMode::Floor, "2"),
        ("-2.3", RoundingMode::Floor, "-3"),
        ("2.5", RoundingMode::HalfUp, "3"),
        ("-2.5", RoundingMode::HalfUp, "-3"),
        ("2.5", RoundingMode::HalfDown, "2"),
        ("-2.5", RoundingMode::HalfDown, "-2"),
        ("2.5", RoundingMode::HalfEven, "2"),
        ("3.5", RoundingMode::HalfEven, "4"),
    ];
    for (input, mode, expected) in cases {
        let rounded = num(input).with_scale(0, mode).unwrap();
        assert_eq!(rounded.to_string(), expected, "{input} under {mode:?}");
    }
    assert_eq!(
        num("2.3").with_scale(0, RoundingMode::Unnecessary),
        Err(NumberError::RoundingRequired)
    );
}

#[test]
fn with_scale_is_idempotent() {
    let values = [num("19.995"), num("-0.0449"), Number::fraction(1, 3).unwrap()];
    let modes = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ];
    for value in &values {
        for mode in modes {
            let once = value.with_scale(2, mode).unwrap();
            let twice = once.with_scale(2, mode).unwrap();
            assert!(once.strict_eq(&twice), "{value} under {mode:?}");
        }
    }
}

#[test]
fn equality_vs_strict_equality() {
    assert_eq!(num("1.2"), num("1.200"));
    assert!(!num("1.2").strict_eq(&num("1.200")));

    let fifth = Number::fraction_raw(1, 5).unwrap();
    assert_eq!(num("0.2"), fifth);
    assert!(!num("0.2").strict_eq(&fifth));

    let unreduced = Number::fraction_raw(2, 6).unwrap();
    assert_eq!(unreduced, Number::fraction(1, 3).unwrap());
    assert!(!unreduced.strict_eq(&Number::fraction(1, 3).unwrap()));
}

#[test]
fn negation_and_abs_keep_scale() {
    let negated = -num("1.20");
    assert_eq!(negated.to_string(), "-1.20");
    assert_eq!(negated.scale(), Some(2));
    assert_eq!(negated.abs().to_string(), "1.20");
}

#[test]
fn mixed_arithmetic_demotes_when_exact() {
    // 1/3 + 1/6 has denominator 2 after reduction: finite
    let sum = Number::fraction(1, 3).unwrap() + Number::fraction(1, 6).unwrap();
    assert_eq!(sum.to_string(), "0.5");

    // 1/3 * 3 is a whole number again
    let product = Number::fraction(1, 3).unwrap() * num("3");
    assert!(product.is_integer());
}

#[test]
fn subtraction_through_ratios() {
    let difference = Number::fraction(1, 3).unwrap() - Number::fraction(1, 3).unwrap();
    assert!(difference.is_zero());
    assert_eq!(difference, Number::zero());
}
