//! Fixed-scale decimal values over arbitrary-precision integers.
//!
//! A `Decimal` stores an unscaled `BigInt` together with a non-negative
//! scale: the represented value is `unscaled / 10^scale`. The scale is
//! structural: trailing zeros are preserved, so `0.20` and `0.2` are
//! distinct representations of the same numeric value and format back
//! exactly as they were written. The rescaling engine with its eight
//! rounding modes lives here as well.

use std::{cmp::Ordering, fmt, str::FromStr};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::{error::NumberError, types::pow10};

/// A fixed-scale decimal: `unscaled / 10^scale`.
///
/// Immutable once constructed; every operation returns a new instance.
/// Derived equality and hashing are structural (same unscaled value, same
/// scale); for numeric comparison across scales use [`Decimal::cmp_value`]
/// or compare through [`Number`](crate::Number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

/// Rounding modes accepted by the rescaling engine.
///
/// "Away from zero" on a negative quotient means one step more negative; no
/// mode ever changes the sign of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RoundingMode {
    /// Any discarded remainder pushes the result away from zero.
    Up,
    /// Discarded digits are dropped (truncation toward zero).
    Down,
    /// Rounds toward positive infinity.
    Ceiling,
    /// Rounds toward negative infinity.
    Floor,
    /// Ties round away from zero.
    HalfUp,
    /// Ties round toward zero.
    HalfDown,
    /// Ties round toward the even quotient.
    HalfEven,
    /// Refuses to round: any nonzero remainder is an error.
    Unnecessary,
}

impl Decimal {
    /// Creates a decimal from an unscaled value and a scale.
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    /// Returns the unscaled value.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Returns the scale (count of digits right of the decimal point).
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if the represented value is zero (at any scale).
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns true if the represented value is negative.
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Returns a copy carried to a coarser-or-equal target scale.
    ///
    /// Raising the scale is always exact: the unscaled value is multiplied
    /// by the needed power of ten.
    fn upscaled(&self, scale: u32) -> Self {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.clone()
        } else {
            Self::new(&self.unscaled * pow10(scale - self.scale), scale)
        }
    }

    /// Adds two decimals exactly.
    ///
    /// Both operands are aligned to the larger scale first; the result keeps
    /// that scale, so addition never rounds and never drops trailing zeros.
    pub fn add(&self, other: &Self) -> Self {
        let scale = self.scale.max(other.scale);
        let a = self.upscaled(scale);
        let b = other.upscaled(scale);
        Self::new(a.unscaled + b.unscaled, scale)
    }

    /// Subtracts `other` exactly (addition of the negation).
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two decimals exactly; the result scale is the sum of the
    /// operand scales.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(&self.unscaled * &other.unscaled, self.scale + other.scale)
    }

    /// Returns the negation; scale unchanged.
    pub fn neg(&self) -> Self {
        Self::new(-&self.unscaled, self.scale)
    }

    /// Returns the absolute value; scale unchanged.
    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    /// Compares represented values, ignoring scale.
    ///
    /// This is deliberately not a `PartialOrd` impl: derived equality on
    /// `Decimal` is structural, and an ordering that calls `0.2` and `0.20`
    /// equal would disagree with it.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        let a = self.upscaled(scale);
        let b = other.upscaled(scale);
        a.unscaled.cmp(&b.unscaled)
    }

    /// Rescales to exactly `scale` fractional digits.
    ///
    /// Raising the scale multiplies the unscaled value by a power of ten and
    /// is always exact. Lowering it divides, and any nonzero remainder is
    /// resolved by `mode`; [`RoundingMode::Unnecessary`] turns that case into
    /// [`NumberError::RoundingRequired`].
    pub fn with_scale(&self, scale: u32, mode: RoundingMode) -> Result<Self, NumberError> {
        match scale.cmp(&self.scale) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Greater => Ok(self.upscaled(scale)),
            Ordering::Less => {
                let factor = pow10(self.scale - scale);
                // truncating division: the remainder keeps the value's sign
                let (quotient, remainder) = self.unscaled.div_rem(&factor);
                if remainder.is_zero() {
                    return Ok(Self::new(quotient, scale));
                }
                if matches!(mode, RoundingMode::Unnecessary) {
                    return Err(NumberError::RoundingRequired);
                }
                let rounded = if round_away_from_zero(mode, &quotient, &remainder, &factor) {
                    if remainder.is_negative() { quotient - 1 } else { quotient + 1 }
                } else {
                    quotient
                };
                Ok(Self::new(rounded, scale))
            }
        }
    }
}

/// Returns whether the truncated quotient should be pushed one step away
/// from zero for the given remainder and rounding mode.
fn round_away_from_zero(mode: RoundingMode, quotient: &BigInt, remainder: &BigInt, factor: &BigInt) -> bool {
    debug_assert!(!remainder.is_zero());
    match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => remainder.is_positive(),
        RoundingMode::Floor => remainder.is_negative(),
        RoundingMode::HalfUp => remainder.abs() * 2 >= *factor,
        RoundingMode::HalfDown => remainder.abs() * 2 > *factor,
        RoundingMode::HalfEven => {
            let doubled = remainder.abs() * 2;
            if doubled > *factor {
                true
            } else if doubled == *factor {
                // exact half: break the tie toward the even quotient
                (quotient.abs() % BigInt::from(2u8)) == BigInt::from(1u8)
            } else {
                false
            }
        }
        RoundingMode::Unnecessary => unreachable!("Unnecessary is rejected before rounding"),
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.abs().to_string();
        let scale = usize::try_from(self.scale).unwrap_or(usize::MAX);
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            write!(f, "{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}

impl FromStr for Decimal {
    type Err = NumberError;

    /// Parses a plain decimal literal: optional sign, integer digits,
    /// optional `.` plus fractional digits.
    ///
    /// The scale of the result is exactly the number of fractional digits in
    /// the input, so parsing and formatting round-trip losslessly. A bare
    /// (optionally signed) `.` parses as zero at scale 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NumberError::invalid_literal(s));
        }

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body.is_empty() {
            return Err(NumberError::invalid_literal(s));
        }

        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_part, frac_part)) => {
                if frac_part.contains('.') {
                    return Err(NumberError::invalid_literal(s));
                }
                (int_part, frac_part)
            }
            None => (body, ""),
        };
        if !int_digits.bytes().all(|b| b.is_ascii_digit()) || !frac_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError::invalid_literal(s));
        }

        let digits = format!("{int_digits}{frac_digits}");
        let unscaled = if digits.is_empty() {
            // the input was just "." (possibly signed): zero
            BigInt::ZERO
        } else {
            BigInt::from_str(&digits).map_err(|_| NumberError::invalid_literal(s))?
        };
        let unscaled = if negative { -unscaled } else { unscaled };
        let scale = u32::try_from(frac_digits.len()).map_err(|_| NumberError::invalid_literal(s))?;
        Ok(Self::new(unscaled, scale))
    }
}
