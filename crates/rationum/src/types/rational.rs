//! Rational values used when a result has no finite decimal expansion.

use std::{cmp::Ordering, fmt};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact fraction with a strictly positive denominator.
///
/// The sign always lives on the numerator. Values built by the promotion
/// rule are fully reduced (`gcd(|numerator|, denominator) == 1`); the
/// non-reducing construction path keeps the pair as given apart from sign
/// normalization, which makes such values distinguishable under strict
/// equality while still comparing as the same number.
///
/// Derived equality and hashing are structural. Numeric comparison is
/// [`Rational::cmp_value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Wraps a pair the caller has already reduced and sign-normalized.
    pub(crate) fn from_reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());
        debug_assert!(numerator.gcd(&denominator).is_one());
        Self { numerator, denominator }
    }

    /// Wraps a pair without reducing it; only the sign is normalized so the
    /// denominator stays positive. The denominator must be nonzero.
    pub(crate) fn from_raw(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self { numerator, denominator }
        }
    }

    /// Returns the numerator (carries the sign).
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator (always positive).
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns true if the represented value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if the represented value is negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the negation.
    pub fn neg(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Best-effort `f64` approximation; the explicit escape hatch out of
    /// exact arithmetic.
    pub fn to_f64(&self) -> f64 {
        let numerator = self.numerator.to_f64().unwrap_or(0.0);
        let denominator = self.denominator.to_f64().unwrap_or(1.0);
        numerator / denominator
    }

    /// Compares represented values by cross-multiplication.
    ///
    /// `a/b < c/d` iff `a*d < c*b` when both denominators are positive,
    /// which the constructors guarantee. Exact, no floating point involved.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
