//! Value types backing the numeric core.

mod decimal;
mod rational;

pub use decimal::{Decimal, RoundingMode};
pub use rational::Rational;

use std::sync::LazyLock;

use num_bigint::BigInt;

/// Number of powers held in the precomputed table.
///
/// Scales past this are rare; they fall back to computing the power directly.
const CACHED_POWERS: usize = 33;

/// Small read-only table of powers of ten, built once on first use.
static POWERS_OF_TEN: LazyLock<Vec<BigInt>> = LazyLock::new(|| {
    let mut powers = Vec::with_capacity(CACHED_POWERS);
    let mut value = BigInt::from(1);
    for _ in 0..CACHED_POWERS {
        powers.push(value.clone());
        value *= 10;
    }
    powers
});

/// Returns `10^exp`.
pub(crate) fn pow10(exp: u32) -> BigInt {
    let index = usize::try_from(exp).unwrap_or(usize::MAX);
    match POWERS_OF_TEN.get(index) {
        Some(power) => power.clone(),
        None => BigInt::from(10u32).pow(exp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10_cached_and_computed() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(3), BigInt::from(1000));
        // past the cached table
        assert_eq!(pow10(40), BigInt::from(10u32).pow(40));
    }
}
