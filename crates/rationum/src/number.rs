//! The unified exact number type and the fraction promotion rule.
//!
//! `Number` is a closed union of the two exact representations: a finite
//! decimal (`Decimal`) or an exact fraction (`Rational`). Every arithmetic,
//! comparison, and formatting operation pattern-matches on the variant pair
//! and produces the most specific exact result: finite whenever the value
//! has a finite decimal expansion, a ratio otherwise. The decision procedure
//! is [`promote`], which classifies a reduced fraction by whether its
//! denominator contains prime factors other than 2 and 5.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
    sync::LazyLock,
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    error::NumberError,
    types::{Decimal, Rational, RoundingMode, pow10},
};

/// An exact number: a finite decimal or an exact ratio.
///
/// Operators (`+`, `-`, `*`) are total; `/` panics on a zero divisor, with
/// [`Number::try_div`] as the fallible form. Equality and ordering compare
/// represented values: `0.2`, `0.20`, and the ratio `1/5` are all equal.
/// Structural distinctions are visible through [`Number::strict_eq`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Number {
    /// A value with a finite decimal expansion, at a structural scale.
    Finite(Decimal),
    /// A value with no finite decimal expansion (or an explicitly
    /// unreduced fraction), with a positive denominator.
    Ratio(Rational),
}

static ZERO: LazyLock<Number> = LazyLock::new(|| Number::Finite(Decimal::new(0, 0)));
static ONE: LazyLock<Number> = LazyLock::new(|| Number::Finite(Decimal::new(1, 0)));

/// Integral doubles below this magnitude keep one fractional digit when
/// converted from `f64` ("2.0" rather than "2"); at or above it they stay
/// bare integers.
const INTEGRAL_POINT_LIMIT: f64 = 1e15;

impl Number {
    /// Returns the shared zero constant.
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// Returns the shared one constant.
    pub fn one() -> Self {
        ONE.clone()
    }

    /// Builds the exact value of `numerator / denominator`.
    ///
    /// The pair is reduced and classified: a denominator whose reduced form
    /// has only 2 and 5 as prime factors yields a finite decimal at the
    /// scale the stripped factors dictate, anything else yields a reduced
    /// ratio. A zero denominator is [`NumberError::DivisionByZero`].
    pub fn fraction(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self, NumberError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        promote(numerator.into(), denominator)
    }

    /// Builds a fraction without reducing it.
    ///
    /// The sign is still normalized onto the numerator, but the magnitude of
    /// the stored pair is kept as given and the value never promotes to a
    /// finite decimal: `fraction_raw(2, 6)` equals `fraction(1, 3)`
    /// numerically while remaining distinguishable under
    /// [`Number::strict_eq`].
    pub fn fraction_raw(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self, NumberError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self::Ratio(Rational::from_raw(numerator.into(), denominator)))
    }

    /// Builds the exact value of the shortest decimal text that round-trips
    /// through `value`.
    ///
    /// This is a deliberately lossy boundary: the result is the exact value
    /// of the `f64`'s shortest representation, not of the underlying binary
    /// fraction. Trailing fractional zeros are collapsed, but mathematically
    /// integer inputs below the 1e15 magnitude threshold keep one fractional
    /// digit so the result stays visibly decimal. Non-finite inputs are
    /// rejected.
    pub fn from_f64(value: f64) -> Result<Self, NumberError> {
        if !value.is_finite() {
            return Err(NumberError::InvalidLiteral(value.to_string()));
        }
        let mut buffer = ryu::Buffer::new();
        let shortest = buffer.format_finite(value);
        let plain = expand_exponent(shortest);
        let decimal = Decimal::from_str(&plain)?;
        Ok(Self::Finite(trim_float_zeros(&decimal, value)))
    }

    /// [`Number::from_f64`] followed by rescaling with `mode`.
    pub fn from_f64_with_scale(value: f64, scale: u32, mode: RoundingMode) -> Result<Self, NumberError> {
        Self::from_f64(value)?.with_scale(scale, mode)
    }

    /// Returns the value as `(numerator, denominator)` in lowest terms,
    /// denominator positive.
    pub fn as_integer_ratio(&self) -> (BigInt, BigInt) {
        let (numerator, denominator) = self.fraction_parts();
        reduce(numerator, denominator)
    }

    /// The fraction view of either variant, as stored (not reduced).
    fn fraction_parts(&self) -> (BigInt, BigInt) {
        match self {
            Self::Finite(decimal) => (decimal.unscaled().clone(), pow10(decimal.scale())),
            Self::Ratio(ratio) => (ratio.numerator().clone(), ratio.denominator().clone()),
        }
    }

    /// Returns the scale for a finite value, `None` for a ratio.
    pub fn scale(&self) -> Option<u32> {
        match self {
            Self::Finite(decimal) => Some(decimal.scale()),
            Self::Ratio(_) => None,
        }
    }

    /// Returns true if the represented value is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Finite(decimal) => decimal.is_zero(),
            Self::Ratio(ratio) => ratio.is_zero(),
        }
    }

    /// Returns true if the represented value is negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Finite(decimal) => decimal.is_negative(),
            Self::Ratio(ratio) => ratio.is_negative(),
        }
    }

    /// Returns true if the represented value is a whole number.
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Finite(decimal) => (decimal.unscaled() % pow10(decimal.scale())).is_zero(),
            Self::Ratio(ratio) => (ratio.numerator() % ratio.denominator()).is_zero(),
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Finite(decimal) => Self::Finite(decimal.abs()),
            Self::Ratio(ratio) => Self::Ratio(ratio.abs()),
        }
    }

    /// Structural equality: the same variant with identical fields.
    ///
    /// Two finite values must share scale as well as value (`0.2` vs `0.20`
    /// fails), two ratios must store the same pair (`2/6` vs `1/3` fails),
    /// and a finite value is never strictly equal to a ratio.
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a == b,
            (Self::Ratio(a), Self::Ratio(b)) => a == b,
            _ => false,
        }
    }

    /// Divides exactly, promoting the result through the fraction rule.
    ///
    /// `10 / 4` is the finite decimal `2.5`; `1 / 3` is the ratio `1/3`.
    /// A divisor whose value is zero is [`NumberError::DivisionByZero`]
    /// regardless of its representation.
    pub fn try_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let (n1, d1) = self.fraction_parts();
        let (n2, d2) = other.fraction_parts();
        promote(n1 * d2, d1 * n2)
    }

    /// Returns the reciprocal; zero has none.
    pub fn recip(&self) -> Result<Self, NumberError> {
        if self.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let (numerator, denominator) = self.fraction_parts();
        promote(denominator, numerator)
    }

    /// Raises to an integer power through the fraction view.
    ///
    /// Negative exponents go through the reciprocal, so a zero base is
    /// [`NumberError::DivisionByZero`] there.
    pub fn pow(&self, exponent: i32) -> Result<Self, NumberError> {
        let exp = exponent.unsigned_abs();
        let (numerator, denominator) = self.as_integer_ratio();
        if exponent < 0 {
            if self.is_zero() {
                return Err(NumberError::DivisionByZero);
            }
            promote(denominator.pow(exp), numerator.pow(exp))
        } else {
            promote(numerator.pow(exp), denominator.pow(exp))
        }
    }

    /// Rescales to `scale` fractional digits using `mode`.
    ///
    /// Raising the scale is always exact. For a ratio the value is first
    /// approximated as an `f64` and re-entered through the float
    /// constructor, so results are only trustworthy for small target scales
    /// well inside `f64` precision; that approximation boundary is
    /// intentional, not silent; exact long division would be the stricter
    /// alternative.
    pub fn with_scale(&self, scale: u32, mode: RoundingMode) -> Result<Self, NumberError> {
        match self {
            Self::Finite(decimal) => Ok(Self::Finite(decimal.with_scale(scale, mode)?)),
            Self::Ratio(ratio) => Self::from_f64(ratio.to_f64())?.with_scale(scale, mode),
        }
    }

    /// Returns the closest value whose reduced denominator is at most
    /// `max_denominator`, found by continued-fraction expansion.
    ///
    /// `max_denominator == 0` returns the value unchanged. The result goes
    /// back through the promotion rule, so it may be finite.
    #[must_use]
    pub fn limit_denominator(&self, max_denominator: u64) -> Self {
        if max_denominator == 0 {
            return self.clone();
        }
        let max_d = BigInt::from(max_denominator);
        let (numerator, denominator) = self.as_integer_ratio();
        if denominator <= max_d {
            return self.clone();
        }

        let target = self.abs();
        let negative = self.is_negative();

        let mut p0 = BigInt::ZERO;
        let mut p1 = BigInt::from(1);
        let mut q0 = BigInt::from(1);
        let mut q1 = BigInt::ZERO;
        let mut n = numerator.abs();
        let mut d = denominator;

        while !d.is_zero() {
            let a = &n / &d;
            let p2 = &a * &p1 + &p0;
            let q2 = &a * &q1 + &q0;
            if q2 > max_d {
                // interpolate between the last two convergents and keep the
                // closer of the two candidates
                let k = (&max_d - &q0) / &q1;
                let bound1 = promote_parts(&k * &p1 + &p0, &k * &q1 + &q0);
                let bound2 = promote_parts(p1, q1);
                let best = if distance(&bound1, &target) <= distance(&bound2, &target) {
                    bound1
                } else {
                    bound2
                };
                return if negative { -best } else { best };
            }
            p0 = p1;
            p1 = p2;
            q0 = q1;
            q1 = q2;
            let next_d = &n % &d;
            n = d;
            d = next_d;
        }

        // the expansion terminated inside the bound: the last convergent is
        // the value itself
        let best = promote_parts(p1, q1);
        if negative { -best } else { best }
    }

    /// Truncates toward zero to an arbitrary-precision integer.
    pub fn to_bigint(&self) -> BigInt {
        let (numerator, denominator) = self.fraction_parts();
        numerator / denominator
    }

    /// Truncates toward zero to an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_bigint().to_i64()
    }

    /// Best-effort `f64` approximation; the explicit escape hatch out of
    /// exact arithmetic.
    pub fn to_f64(&self) -> f64 {
        let (numerator, denominator) = self.fraction_parts();
        numerator.to_f64().unwrap_or(0.0) / denominator.to_f64().unwrap_or(1.0)
    }
}

/// Applies the promotion rule to a fraction with a nonzero denominator.
///
/// Reduces the pair, normalizes the sign, then strips factors of 2 and 5
/// from the denominator, counting the total removed factors as the candidate
/// scale. A fully stripped denominator means the value has a finite decimal
/// expansion at that scale; the numerator is scaled by the exact quotient
/// `10^scale / denominator`. Any other remaining factor yields a reduced
/// ratio.
fn promote(numerator: BigInt, denominator: BigInt) -> Result<Number, NumberError> {
    let (numerator, denominator) = reduce(numerator, denominator);
    let (stripped, scale) = strip_ten_factors(denominator.clone());
    if stripped.is_one() {
        let (multiplier, remainder) = pow10(scale).div_rem(&denominator);
        if !remainder.is_zero() {
            return Err(NumberError::Internal("a 2/5-only denominator must divide a power of ten"));
        }
        Ok(Number::Finite(Decimal::new(numerator * multiplier, scale)))
    } else {
        Ok(Number::Ratio(Rational::from_reduced(numerator, denominator)))
    }
}

/// Promotion for operands arithmetic has already proven nonzero.
fn promote_parts(numerator: BigInt, denominator: BigInt) -> Number {
    match promote(numerator, denominator) {
        Ok(value) => value,
        Err(err) => unreachable!("fraction promotion failed on a nonzero denominator: {err}"),
    }
}

/// Sign-normalizes and divides out the GCD. Zero reduces to `0/1`.
fn reduce(numerator: BigInt, denominator: BigInt) -> (BigInt, BigInt) {
    debug_assert!(!denominator.is_zero());
    let (mut numerator, mut denominator) = if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    let gcd = numerator.gcd(&denominator);
    if !gcd.is_one() {
        numerator /= &gcd;
        denominator /= &gcd;
    }
    (numerator, denominator)
}

/// Strips factors of 2 and 5, returning the remaining factor and the total
/// count of factors removed.
fn strip_ten_factors(mut denominator: BigInt) -> (BigInt, u32) {
    let mut scale = 0u32;
    for factor in [BigInt::from(2), BigInt::from(5)] {
        loop {
            let (quotient, remainder) = denominator.div_rem(&factor);
            if !remainder.is_zero() {
                break;
            }
            denominator = quotient;
            scale += 1;
        }
    }
    (denominator, scale)
}

/// Absolute difference, used to pick between convergents.
fn distance(candidate: &Number, target: &Number) -> Number {
    (candidate - target).abs()
}

/// Rewrites scientific notation ("1.5e16") into plain positional text so it
/// can go through the ordinary literal parser.
fn expand_exponent(shortest: &str) -> String {
    let Some(e_pos) = shortest.find(['e', 'E']) else {
        return shortest.to_owned();
    };
    let (mantissa, exponent_text) = shortest.split_at(e_pos);
    let exponent: i64 = exponent_text[1..].parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (int_digits, frac_digits) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let digits = format!("{int_digits}{frac_digits}");
    let point = i64::try_from(int_digits.len()).unwrap_or(i64::MAX) + exponent;
    if point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("{sign}0.{}{digits}", "0".repeat(zeros))
    } else {
        let point = usize::try_from(point).unwrap_or(digits.len());
        if point >= digits.len() {
            let zeros = "0".repeat(point - digits.len());
            format!("{sign}{digits}{zeros}")
        } else {
            let (int_part, frac_part) = digits.split_at(point);
            format!("{sign}{int_part}.{frac_part}")
        }
    }
}

/// Applies the float trailing-zero trim policy.
///
/// Trailing fractional zeros collapse; if that leaves a whole number whose
/// magnitude is under [`INTEGRAL_POINT_LIMIT`], one fractional digit is kept
/// so the result reads as a decimal rather than an integer.
fn trim_float_zeros(decimal: &Decimal, value: f64) -> Decimal {
    let mut unscaled = decimal.unscaled().clone();
    let mut scale = decimal.scale();
    let ten = BigInt::from(10);
    while scale > 0 {
        let (quotient, remainder) = unscaled.div_rem(&ten);
        if !remainder.is_zero() {
            break;
        }
        unscaled = quotient;
        scale -= 1;
    }
    if scale == 0 && value.abs() < INTEGRAL_POINT_LIMIT {
        unscaled *= 10;
        scale = 1;
    }
    Decimal::new(unscaled, scale)
}

fn add_values(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        // finite addition stays finite: align scales, never round
        (Number::Finite(a), Number::Finite(b)) => Number::Finite(a.add(b)),
        _ => {
            let (n1, d1) = lhs.fraction_parts();
            let (n2, d2) = rhs.fraction_parts();
            promote_parts(&n1 * &d2 + &n2 * &d1, d1 * d2)
        }
    }
}

fn mul_values(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Finite(a), Number::Finite(b)) => Number::Finite(a.mul(b)),
        _ => {
            let (n1, d1) = lhs.fraction_parts();
            let (n2, d2) = rhs.fraction_parts();
            promote_parts(n1 * n2, d1 * d2)
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add_values(&self, &rhs)
    }
}

impl Add<&Number> for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        add_values(self, rhs)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        add_values(&self, &-rhs)
    }
}

impl Sub<&Number> for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        add_values(self, &-rhs)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        mul_values(&self, &rhs)
    }
}

impl Mul<&Number> for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        mul_values(self, rhs)
    }
}

impl Div for Number {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Number::try_div`] for a fallible
    /// form.
    fn div(self, rhs: Self) -> Self {
        match self.try_div(&rhs) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Div<&Number> for &Number {
    type Output = Number;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Number::try_div`] for a fallible
    /// form.
    fn div(self, rhs: &Number) -> Number {
        match self.try_div(rhs) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Finite(decimal) => Self::Finite(decimal.neg()),
            Self::Ratio(ratio) => Self::Ratio(ratio.neg()),
        }
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Finite(decimal) => Number::Finite(decimal.neg()),
            Number::Ratio(ratio) => Number::Ratio(ratio.neg()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    /// The canonical numeric ordering behind every relational operator.
    ///
    /// Finite pairs align scales and compare unscaled values; any pair
    /// involving a ratio compares by cross-multiplication of the fraction
    /// views, so no precision is ever lost.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.cmp_value(b),
            (Self::Ratio(a), Self::Ratio(b)) => a.cmp_value(b),
            _ => {
                let (n1, d1) = self.fraction_parts();
                let (n2, d2) = other.fraction_parts();
                (n1 * d2).cmp(&(n2 * d1))
            }
        }
    }
}

impl Hash for Number {
    /// Hashes the reduced fraction view so numerically equal values agree,
    /// keeping `Hash` consistent with the numeric `Eq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (numerator, denominator) = self.as_integer_ratio();
        numerator.hash(state);
        denominator.hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(decimal) => write!(f, "{decimal}"),
            Self::Ratio(ratio) => write!(f, "{ratio}"),
        }
    }
}

impl FromStr for Number {
    type Err = NumberError;

    /// Parses either a plain decimal literal or `numerator/denominator`
    /// fraction syntax (whitespace around the slash tolerated).
    ///
    /// Fraction input feeds the reducing promotion rule, so `"10/20"` parses
    /// to the finite decimal `0.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((numerator, denominator)) = trimmed.split_once('/') {
            let numerator = parse_integer(numerator, s)?;
            let denominator = parse_integer(denominator, s)?;
            return Self::fraction(numerator, denominator);
        }
        Decimal::from_str(trimmed).map(Self::Finite)
    }
}

/// Parses one signed integer operand of the fraction syntax.
fn parse_integer(text: &str, source: &str) -> Result<BigInt, NumberError> {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::invalid_literal(source));
    }
    BigInt::from_str(text).map_err(|_| NumberError::invalid_literal(source))
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Finite(Decimal::new(value, 0))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Finite(Decimal::new(value, 0))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Finite(Decimal::new(value, 0))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Finite(Decimal::new(value, 0))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Finite(Decimal::new(value, 0))
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Self::Finite(value)
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        Self::Ratio(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn test_promotion_classifies_denominators() {
        let third = Number::fraction(1, 3).unwrap();
        assert!(matches!(third, Number::Ratio(_)));
        assert_eq!(third.to_string(), "1/3");

        let half = Number::fraction(10, 20).unwrap();
        assert!(matches!(half, Number::Finite(_)));
        assert_eq!(half.to_string(), "0.5");
    }

    #[test]
    fn test_promotion_counts_stripped_factors() {
        // the candidate scale counts every stripped 2 and 5, so 1/10 lands
        // at scale 2 with the numerator made up exactly
        let tenth = Number::fraction(1, 10).unwrap();
        assert_eq!(tenth.to_string(), "0.10");
        assert_eq!(tenth, num("0.1"));

        let quarter = Number::fraction(1, 4).unwrap();
        assert_eq!(quarter.to_string(), "0.25");
    }

    #[test]
    fn test_fraction_normalizes_sign() {
        assert_eq!(Number::fraction(1, -3).unwrap().to_string(), "-1/3");
        assert_eq!(Number::fraction(-1, -3).unwrap().to_string(), "1/3");
    }

    #[test]
    fn test_fraction_zero_denominator() {
        assert_eq!(Number::fraction(1, 0), Err(NumberError::DivisionByZero));
        assert_eq!(Number::fraction_raw(1, 0), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_division_promotes_and_demotes() {
        let exact = num("10").try_div(&num("4")).unwrap();
        assert_eq!(exact, num("2.5"));
        assert!(matches!(exact, Number::Finite(_)));

        let third = num("1").try_div(&num("3")).unwrap();
        assert_eq!(third, Number::fraction(1, 3).unwrap());

        // ratio arithmetic can land back on a finite value
        let demoted = Number::fraction(1, 3).unwrap() * Number::fraction(3, 2).unwrap();
        assert_eq!(demoted.to_string(), "0.5");
    }

    #[test]
    fn test_division_by_zero_any_representation() {
        let zero_decimal = num("0.00");
        assert_eq!(num("1").try_div(&zero_decimal), Err(NumberError::DivisionByZero));
        let zero_raw = Number::fraction_raw(0, 7).unwrap();
        assert_eq!(num("1").try_div(&zero_raw), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_operators_mix_variants() {
        let sum = Number::fraction(1, 3).unwrap() + Number::fraction(1, 6).unwrap();
        assert_eq!(sum.to_string(), "0.5");

        let difference = num("0.5") - Number::fraction(1, 3).unwrap();
        assert_eq!(difference, Number::fraction(1, 6).unwrap());

        let product = num("3") * Number::fraction(1, 3).unwrap();
        assert_eq!(product, Number::one());
    }

    #[test]
    fn test_finite_addition_keeps_scale() {
        let sum = num("0.1") + num("0.2");
        assert_eq!(sum.to_string(), "0.3");
        let sum = num("1.25") + num("0.75");
        assert_eq!(sum.to_string(), "2.00");
    }

    #[test]
    fn test_numeric_vs_strict_equality() {
        assert_eq!(num("1.2"), num("1.200"));
        assert!(!num("1.2").strict_eq(&num("1.200")));

        let fifth = Number::fraction_raw(1, 5).unwrap();
        assert_eq!(num("0.2"), fifth);
        assert!(!num("0.2").strict_eq(&fifth));

        let unreduced = Number::fraction_raw(2, 6).unwrap();
        let third = Number::fraction(1, 3).unwrap();
        assert_eq!(unreduced, third);
        assert!(!unreduced.strict_eq(&third));
        assert!(third.strict_eq(&third.clone()));
    }

    #[test]
    fn test_ordering_is_exact() {
        assert!(Number::fraction(1, 3).unwrap() < num("0.34"));
        assert!(Number::fraction(1, 3).unwrap() > num("0.33"));
        assert!(num("-0.5") < Number::fraction(-1, 3).unwrap());
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(value: &Number) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&num("0.2")), hash_of(&Number::fraction_raw(1, 5).unwrap()));
        assert_eq!(hash_of(&num("1.2")), hash_of(&num("1.200")));
    }

    #[test]
    fn test_ratio_rescaling_via_double() {
        let third = Number::fraction(1, 3).unwrap();
        let rounded = third.with_scale(4, RoundingMode::HalfEven).unwrap();
        assert_eq!(rounded.to_string(), "0.3333");

        let two_thirds = Number::fraction(2, 3).unwrap();
        let rounded = two_thirds.with_scale(2, RoundingMode::HalfEven).unwrap();
        assert_eq!(rounded.to_string(), "0.67");
    }

    #[test]
    fn test_from_f64_trim_policy() {
        assert_eq!(Number::from_f64(2.0).unwrap().to_string(), "2.0");
        assert_eq!(Number::from_f64(-2.0).unwrap().to_string(), "-2.0");
        assert_eq!(Number::from_f64(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Number::from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(Number::from_f64(0.0).unwrap().to_string(), "0.0");
        // at the magnitude threshold the integer form wins
        assert_eq!(Number::from_f64(1e15).unwrap().to_string(), "1000000000000000");
        assert_eq!(Number::from_f64(1e16).unwrap().to_string(), "10000000000000000");
        assert!(Number::from_f64(f64::NAN).is_err());
        assert!(Number::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_f64_with_scale() {
        let rounded = Number::from_f64_with_scale(2.675, 2, RoundingMode::HalfEven).unwrap();
        // 2.675 is exactly the shortest text, so rounding is decimal-exact
        assert_eq!(rounded.to_string(), "2.68");
    }

    #[test]
    fn test_expand_exponent_forms() {
        assert_eq!(expand_exponent("1e16"), "10000000000000000");
        assert_eq!(expand_exponent("1.5e3"), "1500");
        assert_eq!(expand_exponent("1.5e1"), "15");
        assert_eq!(expand_exponent("1.25e1"), "12.5");
        assert_eq!(expand_exponent("1.5e-7"), "0.00000015");
        assert_eq!(expand_exponent("-2.5e-3"), "-0.0025");
        assert_eq!(expand_exponent("3.25"), "3.25");
    }

    #[test]
    fn test_conversions_truncate_toward_zero() {
        assert_eq!(num("2.7").to_i64(), Some(2));
        assert_eq!(num("-2.7").to_i64(), Some(-2));
        assert_eq!(Number::fraction(7, 2).unwrap().to_i64(), Some(3));
        assert_eq!(Number::fraction(-7, 3).unwrap().to_bigint(), BigInt::from(-2));
    }

    #[test]
    fn test_recip_and_pow() {
        assert_eq!(num("0.25").recip().unwrap().to_string(), "4");
        assert_eq!(Number::fraction(2, 3).unwrap().recip().unwrap().to_string(), "1.5");
        assert_eq!(Number::zero().recip(), Err(NumberError::DivisionByZero));

        assert_eq!(num("1.5").pow(2).unwrap().to_string(), "2.25");
        assert_eq!(Number::fraction(1, 3).unwrap().pow(2).unwrap().to_string(), "1/9");
        assert_eq!(num("2").pow(-2).unwrap().to_string(), "0.25");
        assert_eq!(num("1.5").pow(0).unwrap(), Number::one());
        assert_eq!(Number::zero().pow(-1), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_limit_denominator_convergents() {
        let pi = num("3.141592653589793");
        assert_eq!(pi.limit_denominator(10).to_string(), "22/7");
        assert_eq!(pi.limit_denominator(200).to_string(), "355/113");
        let negative = num("-3.141592653589793");
        assert_eq!(negative.limit_denominator(10).to_string(), "-22/7");

        // already within the bound: unchanged
        let third = Number::fraction(1, 3).unwrap();
        assert!(third.limit_denominator(10).strict_eq(&third));
        assert!(third.limit_denominator(0).strict_eq(&third));
    }

    #[test]
    fn test_is_integer_predicate() {
        assert!(num("3").is_integer());
        assert!(num("3.00").is_integer());
        assert!(!num("3.01").is_integer());
        assert!(Number::fraction_raw(4, 2).unwrap().is_integer());
        assert!(!Number::fraction(1, 3).unwrap().is_integer());
    }

    #[test]
    fn test_constants() {
        assert!(Number::zero().is_zero());
        assert_eq!(Number::one().to_string(), "1");
        assert_eq!(Number::zero().scale(), Some(0));
    }
}
